//! MySQL repository implementations

pub mod equipment_repository;
pub mod rental_repository;
pub mod user_repository;

pub use equipment_repository::MySqlEquipmentRepository;
pub use rental_repository::MySqlRentalRepository;
pub use user_repository::MySqlUserRepository;
