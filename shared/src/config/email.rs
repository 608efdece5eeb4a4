//! Outbound mail gateway configuration
//!
//! Credentials are always sourced from the environment; nothing mail-related
//! is compiled into the binary.

use serde::{Deserialize, Serialize};

/// Transactional mail gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Base URL of the transactional mail HTTP API
    pub api_url: String,

    /// API key for the mail provider
    #[serde(skip_serializing)]
    pub api_key: String,

    /// Sender address for all outbound mail
    pub from_address: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Use the mock mailer instead of the HTTP gateway
    #[serde(default)]
    pub use_mock: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://api.brevo.com/v3/smtp/email"),
            api_key: String::new(),
            from_address: String::from("no-reply@equiprent.example"),
            request_timeout_secs: 30,
            use_mock: true,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    ///
    /// Falls back to the mock mailer when `MAIL_API_KEY` is absent so that
    /// development environments never need real credentials.
    pub fn from_env() -> Self {
        let api_key = std::env::var("MAIL_API_KEY").unwrap_or_default();
        let use_mock = api_key.is_empty()
            || std::env::var("MAIL_USE_MOCK")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false);

        Self {
            api_url: std::env::var("MAIL_API_URL")
                .unwrap_or_else(|_| "https://api.brevo.com/v3/smtp/email".to_string()),
            api_key,
            from_address: std::env::var("MAIL_FROM")
                .unwrap_or_else(|_| "no-reply@equiprent.example".to_string()),
            request_timeout_secs: std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            use_mock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_mock_mailer() {
        let config = EmailConfig::default();
        assert!(config.use_mock);
        assert!(config.api_key.is_empty());
    }
}
