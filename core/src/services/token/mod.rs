//! Token service module
//!
//! Issues and verifies the bearer credentials used by every protected
//! endpoint.

mod config;
mod service;

pub use config::TokenServiceConfig;
pub use service::TokenService;
