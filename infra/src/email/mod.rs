//! Email delivery module
//!
//! Implementations of the [`Mailer`] port from `eq_core`: an HTTP
//! client for a transactional mail API and a console-logging mock for
//! development and tests. [`AppMailer`] wraps both so wiring code can
//! pick one at runtime from configuration.

pub mod http_mailer;
pub mod mock;

pub use http_mailer::HttpMailer;
pub use mock::MockMailer;

use async_trait::async_trait;

use eq_core::errors::DomainError;
use eq_core::services::Mailer;
use eq_shared::EmailConfig;

/// Runtime-selected mail backend
///
/// The HTTP backend needs an API key; without one the mock is used so
/// development environments never attempt outbound delivery.
#[derive(Clone)]
pub enum AppMailer {
    Http(HttpMailer),
    Mock(MockMailer),
}

impl AppMailer {
    /// Select a backend from configuration
    pub fn from_config(config: &EmailConfig) -> Self {
        if config.use_mock {
            tracing::info!("Mail delivery disabled, using mock mailer");
            AppMailer::Mock(MockMailer::new())
        } else {
            AppMailer::Http(HttpMailer::new(config.clone()))
        }
    }
}

#[async_trait]
impl Mailer for AppMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), DomainError> {
        match self {
            AppMailer::Http(mailer) => mailer.send(to, subject, body).await,
            AppMailer::Mock(mailer) => mailer.send(to, subject, body).await,
        }
    }
}
