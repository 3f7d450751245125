use std::{collections::HashMap, fs, path::PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[serde(alias = "dev")]
    Development,
    #[serde(alias = "prod")]
    Production,
}

impl Environment {
    pub fn parse(raw: &str) -> Option<Environment> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub bind_addr: String,
    pub static_dir: PathBuf,
    pub environment: Environment,
    pub dev_server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5173".into(),
            static_dir: "./dist".into(),
            environment: Environment::Production,
            dev_server_url: "http://127.0.0.1:5174".into(),
        }
    }
}

/// Layered settings: defaults, then `server.toml`, then environment
/// variables. `PORT` keeps the loopback host and swaps only the port, which
/// is how the hosting platform hands the listen port down.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.bind_addr = v.clone();
            }
            if let Some(v) = file_cfg.get("static_dir") {
                settings.static_dir = PathBuf::from(v);
            }
            if let Some(v) = file_cfg.get("environment") {
                if let Some(parsed) = Environment::parse(v) {
                    settings.environment = parsed;
                }
            }
            if let Some(v) = file_cfg.get("dev_server_url") {
                settings.dev_server_url = v.clone();
            }
        }
    }

    if let Ok(v) = std::env::var("PORT") {
        if let Some(bind_addr) = loopback_bind_addr(&v) {
            settings.bind_addr = bind_addr;
        }
    }
    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.bind_addr = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Ok(v) = std::env::var("STATIC_DIR") {
        settings.static_dir = PathBuf::from(v);
    }
    if let Ok(v) = std::env::var("APP__STATIC_DIR") {
        settings.static_dir = PathBuf::from(v);
    }

    if let Ok(v) = std::env::var("APP_ENV") {
        if let Some(parsed) = Environment::parse(&v) {
            settings.environment = parsed;
        }
    }
    if let Ok(v) = std::env::var("APP__ENVIRONMENT") {
        if let Some(parsed) = Environment::parse(&v) {
            settings.environment = parsed;
        }
    }

    if let Ok(v) = std::env::var("DEV_SERVER_URL") {
        settings.dev_server_url = v;
    }
    if let Ok(v) = std::env::var("APP__DEV_SERVER_URL") {
        settings.dev_server_url = v;
    }

    settings
}

fn loopback_bind_addr(port: &str) -> Option<String> {
    let port: u16 = port.trim().parse().ok()?;
    Some(format!("127.0.0.1:{port}"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
