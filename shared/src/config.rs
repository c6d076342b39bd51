use thiserror::Error;
use url::Url;

use crate::text::ButtonText;
use crate::urls::DEFAULT_LOGIN_URL;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("login url is empty")]
    EmptyUrl,
    #[error("login url is not valid: {0}")]
    InvalidUrl(String),
    #[error("login button label is empty")]
    EmptyLabel,
}

/// Where the login button sends the browser, and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    pub url: String,
    pub label: String,
}

impl LoginConfig {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let label = label.into();
        validate_url(&url)?;
        if label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel);
        }
        Ok(Self { url, label })
    }

    /// Builds a config from optional overrides, using the defaults for
    /// anything missing or blank.
    pub fn from_overrides(url: Option<&str>, label: Option<&str>) -> Result<Self, ConfigError> {
        let url = non_blank(url).unwrap_or(DEFAULT_LOGIN_URL);
        let label = non_blank(label).unwrap_or(ButtonText::LOGIN_YAHOO);
        Self::new(url, label)
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_LOGIN_URL.to_string(),
            label: ButtonText::LOGIN_YAHOO.to_string(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Stand-in origin for resolving root-relative paths.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Accepts absolute http(s) URLs with a host, or root-relative paths that
/// stay on the current origin.
fn validate_url(raw: &str) -> Result<(), ConfigError> {
    if raw.is_empty() {
        return Err(ConfigError::EmptyUrl);
    }
    let invalid = || ConfigError::InvalidUrl(raw.to_string());
    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid());
    }

    if raw.starts_with('/') {
        let base = Url::parse(RELATIVE_BASE).map_err(|_| invalid())?;
        let joined = base.join(raw).map_err(|_| invalid())?;
        // "//host" and "/\host" resolve to another origin
        if joined.host_str() != base.host_str() || joined.port() != base.port() {
            return Err(invalid());
        }
        return Ok(());
    }

    let parsed = Url::parse(raw).map_err(|_| invalid())?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(invalid());
    }

    Ok(())
}
