//! Repository interfaces for entity persistence (the persistence gateway)
//!
//! These traits define the contract between the domain layer and whatever
//! actually stores the data. Implementations live in the infrastructure
//! crate (MySQL) and in [`memory`] (in-memory, for tests and development).

pub mod equipment;
pub mod memory;
pub mod rental;
pub mod user;

pub use equipment::EquipmentRepository;
pub use memory::InMemoryStore;
pub use rental::{RentalRepository, RentalStore};
pub use user::UserRepository;
