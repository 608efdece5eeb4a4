//! Domain entities for the EquipRent system

pub mod equipment;
pub mod rental;
pub mod token;
pub mod user;

pub use equipment::Equipment;
pub use rental::RentalRecord;
pub use token::{AuthToken, Claims};
pub use user::User;
