//! HTTP transactional mail client
//!
//! Sends mail through an HTTP mail API (Brevo-compatible payload
//! shape). The API key travels in the `api-key` request header and is
//! never logged.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use eq_core::errors::DomainError;
use eq_core::services::{mask_email, Mailer};
use eq_shared::EmailConfig;

#[derive(Serialize)]
struct Party<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMailRequest<'a> {
    sender: Party<'a>,
    to: Vec<Party<'a>>,
    subject: &'a str,
    text_content: &'a str,
}

/// Mail client backed by an HTTP transactional mail API
#[derive(Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    config: EmailConfig,
}

impl HttpMailer {
    pub fn new(config: EmailConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();
        Self { client, config }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), DomainError> {
        let payload = SendMailRequest {
            sender: Party {
                email: &self.config.from_address,
            },
            to: vec![Party { email: to }],
            subject,
            text_content: body,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .header("api-key", &self.config.api_key)
            .header("accept", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Mail request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(
                recipient = %mask_email(to),
                %status,
                "Mail API rejected the message"
            );
            return Err(DomainError::Internal {
                message: format!("Mail API returned status {}", status),
            });
        }

        tracing::info!(recipient = %mask_email(to), subject, "Mail sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_uses_the_expected_field_names() {
        let payload = SendMailRequest {
            sender: Party {
                email: "no-reply@equiprent.example",
            },
            to: vec![Party {
                email: "renter@example.com",
            }],
            subject: "Welcome",
            text_content: "Hello",
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["sender"]["email"], "no-reply@equiprent.example");
        assert_eq!(json["to"][0]["email"], "renter@example.com");
        assert_eq!(json["textContent"], "Hello");
    }
}
