//! Business services containing domain logic and use cases.

pub mod auth;
pub mod equipment;
pub mod notification;
pub mod rental;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use equipment::{EquipmentService, EquipmentUpdate, NewEquipment};
pub use notification::{mask_email, Mailer};
pub use rental::{NewRental, RentalOutcome, RentalService, RentalUpdate};
pub use token::{TokenService, TokenServiceConfig};
