use super::*;

#[test]
fn defaults_serve_production_from_dist_on_loopback() {
    let settings = Settings::default();
    assert_eq!(settings.bind_addr, "127.0.0.1:5173");
    assert_eq!(settings.static_dir, PathBuf::from("./dist"));
    assert_eq!(settings.environment, Environment::Production);
    assert_eq!(settings.dev_server_url, "http://127.0.0.1:5174");
}

#[test]
fn environment_parse_accepts_short_and_long_forms() {
    assert_eq!(Environment::parse("development"), Some(Environment::Development));
    assert_eq!(Environment::parse("dev"), Some(Environment::Development));
    assert_eq!(Environment::parse("  PROD "), Some(Environment::Production));
    assert_eq!(Environment::parse("production"), Some(Environment::Production));
    assert_eq!(Environment::parse("staging"), None);
    assert_eq!(Environment::parse(""), None);
}

#[test]
fn port_override_keeps_the_loopback_host() {
    assert_eq!(loopback_bind_addr("8080"), Some("127.0.0.1:8080".into()));
    assert_eq!(loopback_bind_addr(" 3000 "), Some("127.0.0.1:3000".into()));
    assert_eq!(loopback_bind_addr("not-a-port"), None);
    assert_eq!(loopback_bind_addr("70000"), None);
}

#[test]
fn environment_deserializes_from_toml_values() {
    #[derive(serde::Deserialize)]
    struct Probe {
        environment: Environment,
    }
    let probe: Probe = toml::from_str("environment = \"dev\"").expect("parse");
    assert_eq!(probe.environment, Environment::Development);
    assert!(toml::from_str::<Probe>("environment = \"staging\"").is_err());
}
