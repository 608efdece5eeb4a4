//! Token service configuration

use eq_shared::config::JwtConfig;

/// Configuration for [`super::TokenService`]
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub secret: String,

    /// Access token lifetime in seconds
    pub access_token_expiry: i64,

    /// Issuer claim, validated on decode
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            access_token_expiry: 86_400, // 24 hours
            issuer: String::from("equiprent"),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            access_token_expiry: config.access_token_expiry,
            issuer: config.issuer.clone(),
        }
    }
}
