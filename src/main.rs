fn main() {
    route_map_web::run();
}
