use super::*;

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.site_dir, PathBuf::from(DEFAULT_SITE_DIR));
}

#[test]
fn explicit_values_override_defaults() {
    let config = ServerConfig::from_vars(Some("8080".to_owned()), Some("/srv/site".to_owned())).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_dir, PathBuf::from("/srv/site"));
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_vars(Some("not-a-port".to_owned()), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(raw) if raw == "not-a-port"));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_vars(Some("70000".to_owned()), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}
