use std::env;
use std::fs;
use std::path::Path;

// Claves que lee `AppConfig::from_env` con option_env!
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "ROUTES_PATH",
    "GEO_API_URL",
    "ENABLE_GEOLOCATION",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "APP_TITLE",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env exists but could not be read");
        return;
    };

    for (key, value) in parse_env(&contents) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown .env key {}", key);
            continue;
        }
        // El entorno real tiene prioridad sobre .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}

/// KEY=VALUE por línea; ignora comentarios, líneas vacías y comillas envolventes
fn parse_env(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            (key.trim(), value)
        })
        .collect()
}
