//! Trait for outbound mail integration

use async_trait::async_trait;

use crate::errors::DomainError;

/// Trait for the outbound mail gateway
///
/// Delivery is synchronous from the caller's perspective; failures are
/// surfaced, and each caller decides whether they are fatal.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a plain-text mail to a single recipient
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), DomainError>;
}

/// Masks an email address for logging
///
/// Keeps the first character of the local part and the full domain:
/// `renter@example.com` becomes `r***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
