//! Build-time application configuration.
//!
//! WASM builds have no process environment at runtime, so values are read
//! with `option_env!` when the crate is compiled:
//!
//! - `SALESTRACK_BASE_PATH`: URL prefix the router is mounted under (default root)
//! - `SALESTRACK_ANALYTICS`: `on` (default) or `off`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::routing::guard::GuardPolicy;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SALESTRACK_BASE_PATH '{0}': must not contain whitespace, '?' or '#'")]
    BasePath(String),
    #[error("invalid SALESTRACK_ANALYTICS '{0}': expected 'on' or 'off'")]
    Analytics(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Normalized mount prefix: empty for root, otherwise `/segment[/...]`.
    pub base_path: String,
    pub analytics_enabled: bool,
    pub policy: GuardPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { base_path: String::new(), analytics_enabled: true, policy: GuardPolicy::default() }
    }
}

impl AppConfig {
    /// Config from the compile-time environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("SALESTRACK_BASE_PATH"), option_env!("SALESTRACK_ANALYTICS"))
    }

    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_values(base_path: Option<&str>, analytics: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_path: normalize_base_path(base_path.unwrap_or(""))?,
            analytics_enabled: parse_toggle(analytics)?,
            policy: GuardPolicy::default(),
        })
    }
}

/// Ensure a leading `/` and strip trailing ones; `""` and `"/"` mean root.
///
/// # Errors
///
/// Returns [`ConfigError::BasePath`] for values a URL path cannot carry.
pub fn normalize_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.chars().any(|c| c.is_whitespace() || c == '?' || c == '#') {
        return Err(ConfigError::BasePath(raw.to_owned()));
    }
    let inner = trimmed.trim_matches('/');
    if inner.is_empty() {
        return Ok(String::new());
    }
    Ok(format!("/{inner}"))
}

fn parse_toggle(raw: Option<&str>) -> Result<bool, ConfigError> {
    match raw.map(str::trim).unwrap_or("on") {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        other => Err(ConfigError::Analytics(other.to_owned())),
    }
}
