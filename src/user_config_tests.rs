use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_empty_toml_produces_defaults() {
    let cfg: UserConfig = toml::from_str("").expect("Should parse empty TOML");
    assert_eq!(cfg, UserConfig::default());
}

#[test]
fn test_server_section_only() {
    let cfg: UserConfig = toml::from_str("[server]\n").expect("Should parse [server] section");
    assert_eq!(cfg.server, ServerConfig::default());
}

#[test]
fn test_server_values_explicit() {
    let toml_str = "[server]\naddr = \"0.0.0.0:9000\"\ncors_origins = [\"http://a.test\", \"*\"]\n";
    let cfg: UserConfig = toml::from_str(toml_str).expect("Should parse server values");
    assert_eq!(cfg.server.addr.as_deref(), Some("0.0.0.0:9000"));
    assert_eq!(
        cfg.server.cors_origins,
        Some(vec!["http://a.test".to_string(), "*".to_string()])
    );
}

#[test]
fn test_unknown_server_key_is_rejected() {
    let result: Result<UserConfig, _> = toml::from_str("[server]\nport = 80\n");
    assert!(result.is_err());
}

#[test]
fn test_roundtrip_serialization() {
    let cfg = UserConfig {
        server: ServerConfig {
            addr: Some("127.0.0.1:1234".to_string()),
            cors_origins: None,
        },
    };
    let serialized = toml::to_string(&cfg).expect("Should serialize");
    let deserialized: UserConfig = toml::from_str(&serialized).expect("Should deserialize");
    assert_eq!(cfg, deserialized);
}

#[test]
fn test_load_user_config_from_absent_file() {
    let dir = tempdir().expect("tempdir");
    let cfg = load_user_config_from(&dir.path().join("config.toml")).expect("absent file is fine");
    assert_eq!(cfg, UserConfig::default());
}

#[test]
fn test_load_user_config_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server]\naddr = \"127.0.0.1:7000\"\n").expect("write config");
    let cfg = load_user_config_from(&path).expect("should load");
    assert_eq!(cfg.server.addr.as_deref(), Some("127.0.0.1:7000"));
}

#[test]
fn test_load_user_config_from_invalid_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server\naddr = ").expect("write config");
    assert!(matches!(
        load_user_config_from(&path),
        Err(UserConfigError::Toml(_))
    ));
}

#[test]
fn test_resolve_uses_builtin_defaults() {
    let settings = ServerSettings::resolve(None, None, &ServerConfig::default());
    assert_eq!(settings.addr, DEFAULT_ADDR);
    assert!(settings.cors_origins.iter().any(|o| o == "http://localhost"));
    assert!(!settings.allows_all_origins());
}

#[test]
fn test_resolve_prefers_file_over_defaults() {
    let file = ServerConfig {
        addr: Some("0.0.0.0:9000".to_string()),
        cors_origins: Some(vec!["*".to_string()]),
    };
    let settings = ServerSettings::resolve(None, None, &file);
    assert_eq!(settings.addr, "0.0.0.0:9000");
    assert!(settings.allows_all_origins());
}

#[test]
fn test_resolve_prefers_cli_over_file() {
    let file = ServerConfig {
        addr: Some("0.0.0.0:9000".to_string()),
        cors_origins: Some(vec!["*".to_string()]),
    };
    let settings = ServerSettings::resolve(
        Some("127.0.0.1:1".to_string()),
        Some(vec![" http://x.test ".to_string(), String::new()]),
        &file,
    );
    assert_eq!(settings.addr, "127.0.0.1:1");
    assert_eq!(settings.cors_origins, vec!["http://x.test".to_string()]);
}
