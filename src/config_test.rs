use super::*;

// =============================================================
// Base path
// =============================================================

#[test]
fn empty_and_slash_mean_root() {
    assert_eq!(normalize_base_path(""), Ok(String::new()));
    assert_eq!(normalize_base_path("/"), Ok(String::new()));
    assert_eq!(normalize_base_path("  "), Ok(String::new()));
}

#[test]
fn base_path_gets_leading_slash_and_loses_trailing() {
    assert_eq!(normalize_base_path("app"), Ok("/app".to_owned()));
    assert_eq!(normalize_base_path("/app/"), Ok("/app".to_owned()));
    assert_eq!(normalize_base_path("/tenant/app//"), Ok("/tenant/app".to_owned()));
}

#[test]
fn base_path_rejects_query_and_fragment() {
    assert!(matches!(normalize_base_path("/app?x=1"), Err(ConfigError::BasePath(_))));
    assert!(matches!(normalize_base_path("/app#top"), Err(ConfigError::BasePath(_))));
    assert!(matches!(normalize_base_path("/my app"), Err(ConfigError::BasePath(_))));
}

// =============================================================
// from_values
// =============================================================

#[test]
fn defaults_are_root_with_analytics_on() {
    let cfg = AppConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert!(cfg.analytics_enabled);
    assert_eq!(cfg.policy.login_path, "/login");
    assert_eq!(cfg.policy.landing_path, "/comercial");
}

#[test]
fn analytics_toggle_parses_on_and_off() {
    assert!(!AppConfig::from_values(None, Some("off")).unwrap().analytics_enabled);
    assert!(AppConfig::from_values(None, Some(" on ")).unwrap().analytics_enabled);
    assert!(!AppConfig::from_values(None, Some("0")).unwrap().analytics_enabled);
}

#[test]
fn analytics_toggle_rejects_unknown_value() {
    let err = AppConfig::from_values(None, Some("maybe")).unwrap_err().to_string();
    assert!(err.contains("SALESTRACK_ANALYTICS"));
}

#[test]
fn base_path_flows_into_config() {
    let cfg = AppConfig::from_values(Some("ventas/"), None).unwrap();
    assert_eq!(cfg.base_path, "/ventas");
}
