pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const DEFAULT_ROUTES_PATH: &str = "/routes";
pub const DEFAULT_GEO_API_URL: &str = "https://freeipapi.com/api/json";
pub const DEFAULT_APP_TITLE: &str = "Route Map";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub routes_path: String,
    pub geo_api_url: String,
    pub enable_geolocation: bool,
    pub enable_logging: bool,
    pub log_level: String,
    pub app_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            routes_path: DEFAULT_ROUTES_PATH.to_string(),
            geo_api_url: DEFAULT_GEO_API_URL.to_string(),
            enable_geolocation: true,
            enable_logging: true,
            log_level: "info".to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url),
            routes_path: option_env!("ROUTES_PATH")
                .map(str::to_string)
                .unwrap_or(defaults.routes_path),
            geo_api_url: option_env!("GEO_API_URL")
                .map(str::to_string)
                .unwrap_or(defaults.geo_api_url),
            enable_geolocation: parse_flag(option_env!("ENABLE_GEOLOCATION"), defaults.enable_geolocation),
            enable_logging: parse_flag(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            app_title: option_env!("APP_TITLE")
                .map(str::to_string)
                .unwrap_or(defaults.app_title),
        }
    }

    /// URL completa del endpoint de rutas
    pub fn routes_url(&self) -> String {
        join_url(&self.backend_url, &self.routes_path)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log para wasm-logger; valores desconocidos => Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Acepta true/false, 1/0, yes/no, on/off
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if matches!(v.as_str(), "true" | "1" | "yes" | "on") => true,
        Some(v) if matches!(v.as_str(), "false" | "0" | "no" | "off") => false,
        _ => default,
    }
}

/// Une base y path con una sola barra entre ambos
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_routes_url_points_at_local_backend() {
        assert_eq!(AppConfig::default().routes_url(), "http://localhost:8000/routes");
    }

    #[test]
    fn join_url_does_not_double_slashes() {
        assert_eq!(join_url("http://host:8000/", "/routes"), "http://host:8000/routes");
        assert_eq!(join_url("http://host:8000", "routes"), "http://host:8000/routes");
        assert_eq!(join_url("http://host:8000/", ""), "http://host:8000");
    }

    #[test]
    fn parse_flag_falls_back_on_garbage() {
        assert!(parse_flag(Some("TRUE"), false));
        assert!(!parse_flag(Some(" off "), true));
        assert!(parse_flag(Some("maybe"), true));
        assert!(!parse_flag(None, false));
    }

    #[test]
    fn unknown_log_level_defaults_to_info() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
