//! EmailJS configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_EMAILJS_BASE_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_SERVICE_ID: &str = "service_2rah7zm";
pub const DEFAULT_TEMPLATE_ID: &str = "template_nwjdeve";
pub const DEFAULT_PUBLIC_KEY: &str = "XqUVm_ck6HfLyU5RW";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Errors raised while reading mailer configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `CONTACT_ENABLED` turned delivery off.
    #[error("contact delivery disabled by CONTACT_ENABLED")]
    Disabled,

    /// A required identifier was set to an empty string.
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Sent as `accessToken` when the account requires a private key.
    pub private_key: Option<String>,
    pub base_url: String,
    pub timeouts: MailTimeouts,
}

impl EmailJsConfig {
    /// Build typed EmailJS config from environment variables.
    ///
    /// Optional:
    /// - `CONTACT_ENABLED`: default true; a false value yields [`ConfigError::Disabled`]
    /// - `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY`
    /// - `EMAILJS_PRIVATE_KEY`: omitted from requests when absent or blank
    /// - `EMAILJS_BASE_URL`: default `https://api.emailjs.com`
    /// - `EMAILJS_REQUEST_TIMEOUT_SECS`: default 15
    /// - `EMAILJS_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        if env_bool("CONTACT_ENABLED") == Some(false) {
            return Err(ConfigError::Disabled);
        }

        let service_id = env_required("EMAILJS_SERVICE_ID", DEFAULT_SERVICE_ID)?;
        let template_id = env_required("EMAILJS_TEMPLATE_ID", DEFAULT_TEMPLATE_ID)?;
        let public_key = env_required("EMAILJS_PUBLIC_KEY", DEFAULT_PUBLIC_KEY)?;
        let private_key = std::env::var("EMAILJS_PRIVATE_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let base_url = std::env::var("EMAILJS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_EMAILJS_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = MailTimeouts {
            request_secs: env_parse_u64("EMAILJS_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("EMAILJS_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { service_id, template_id, public_key, private_key, base_url, timeouts })
    }
}

fn env_required(key: &'static str, default: &str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Err(ConfigError::Empty { var: key }),
        Ok(raw) => Ok(raw.trim().to_string()),
        Err(_) => Ok(default.to_string()),
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}
