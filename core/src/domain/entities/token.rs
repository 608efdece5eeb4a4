//! JWT claims and issued-token value objects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

/// Claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's UUID as a string
    pub sub: String,

    /// The user's email address
    pub email: String,

    /// Issuer
    pub iss: String,

    /// Issued-at (seconds since epoch)
    pub iat: i64,

    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Parses the subject claim back into a user id
    pub fn user_id(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::InvalidClaims)
    }
}

/// A freshly issued bearer credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    /// The signed JWT
    pub access_token: String,

    /// Always "Bearer"
    pub token_type: String,

    /// Seconds until expiry
    pub expires_in: i64,
}

impl AuthToken {
    pub fn new(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
