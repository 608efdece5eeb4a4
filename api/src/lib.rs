//! # HTTP API Layer
//!
//! Actix-web surface of the rental service: route handlers, JWT
//! authentication middleware, CORS configuration, and the application
//! factory that wires the domain services into an `App`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
