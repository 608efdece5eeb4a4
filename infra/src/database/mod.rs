//! Database module - MySQL implementations using SQLx
//!
//! Provides the connection pool wrapper and the repository
//! implementations backing the domain's persistence ports.

pub mod connection;
pub mod mysql;

pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlEquipmentRepository, MySqlRentalRepository, MySqlUserRepository};
