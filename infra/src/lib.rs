//! # Infrastructure Layer
//!
//! Concrete implementations of the persistence and notification ports
//! defined in `eq_core`:
//!
//! - **Database**: MySQL repositories using SQLx, including the
//!   transactional rental commit
//! - **Email**: HTTP mail API client and a console-logging mock

pub mod database;
pub mod email;

pub use database::{
    DatabasePool, MySqlEquipmentRepository, MySqlRentalRepository, MySqlUserRepository,
    PoolStatistics,
};
pub use email::{AppMailer, HttpMailer, MockMailer};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for the mail API
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail delivery error
    #[error("Mail error: {0}")]
    Mail(String),
}

impl From<InfrastructureError> for eq_core::errors::DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => {
                eq_core::errors::DomainError::database(e.to_string())
            }
            other => eq_core::errors::DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}
