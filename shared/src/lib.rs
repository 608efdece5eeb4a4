//! Shared utilities and common types for the EquipRent server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The error response envelope

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, EmailConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig,
};
pub use types::ErrorResponse;
