//! Authentication service module
//!
//! Registration, login, and deposit top-up. Token mechanics live in
//! [`crate::services::token`]; outbound mail goes through the
//! [`crate::services::notification::Mailer`] seam.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
