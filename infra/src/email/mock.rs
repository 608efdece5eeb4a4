//! Mock mail implementation for development and testing
//!
//! Logs messages instead of sending them and tracks a send counter so
//! tests can assert on delivery attempts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use eq_core::errors::DomainError;
use eq_core::services::{mask_email, Mailer};

/// Mail backend that logs instead of delivering
#[derive(Clone, Default)]
pub struct MockMailer {
    sent_count: Arc<AtomicU64>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages "sent" so far
    pub fn sent_count(&self) -> u64 {
        self.sent_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, _body: &str) -> Result<(), DomainError> {
        self.sent_count.fetch_add(1, Ordering::SeqCst);
        info!(recipient = %mask_email(to), subject, "Mock mail delivered");
        Ok(())
    }
}
