use super::*;

#[test]
fn from_vars_defaults() {
    let cfg = ServerConfig::from_vars(None, None, None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_empty_strings_are_unset() {
    let cfg = ServerConfig::from_vars(Some(""), Some("  "), Some(""), None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("8080"), Some("127.0.0.1"), Some("https://thermasim.com/"), None).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.public_origin.as_deref(), Some("https://thermasim.com"));
}

#[test]
fn from_vars_accepts_origin_with_port() {
    let cfg = ServerConfig::from_vars(None, None, Some("http://localhost:5173"), None).unwrap();
    assert_eq!(cfg.public_origin.as_deref(), Some("http://localhost:5173"));
}

#[test]
fn from_vars_rejects_bad_port() {
    let err = ServerConfig::from_vars(Some("http"), None, None, None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn from_vars_rejects_out_of_range_port() {
    assert!(matches!(ServerConfig::from_vars(Some("70000"), None, None, None), Err(ConfigError::InvalidPort(_))));
}

#[test]
fn from_vars_rejects_bad_bind_addr() {
    let err = ServerConfig::from_vars(None, Some("localhost"), None, None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".into()));
}

#[test]
fn from_vars_rejects_origin_without_scheme() {
    let err = ServerConfig::from_vars(None, None, Some("thermasim.com"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidOrigin("thermasim.com".into()));
}

#[test]
fn from_vars_rejects_origin_with_path() {
    assert!(ServerConfig::from_vars(None, None, Some("https://thermasim.com/app"), None).is_err());
    assert!(ServerConfig::from_vars(None, None, Some("https://"), None).is_err());
}


#[test]
fn from_vars_does_not_trust_forwarded_headers_by_default() {
    let cfg = ServerConfig::from_vars(None, None, None, None).unwrap();
    assert!(!cfg.trust_forwarded_headers);
}

#[test]
fn from_vars_trust_forwarded_variants() {
    for val in ["1", "true", "YES", " on "] {
        let cfg = ServerConfig::from_vars(None, None, None, Some(val)).unwrap();
        assert!(cfg.trust_forwarded_headers, "expected true for {val:?}");
    }
    for val in ["0", "false", "No", "off"] {
        let cfg = ServerConfig::from_vars(None, None, None, Some(val)).unwrap();
        assert!(!cfg.trust_forwarded_headers, "expected false for {val:?}");
    }
}

#[test]
fn from_vars_rejects_bad_trust_forwarded() {
    let err = ServerConfig::from_vars(None, None, None, Some("maybe")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTrustForwarded("maybe".into()));
}
