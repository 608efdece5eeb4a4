//! Request and response data transfer objects

pub mod account;
pub mod auth;
pub mod equipment;
pub mod rental;

pub use account::{TopUpRequest, TopUpResponse};
pub use auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use equipment::{CreateEquipmentRequest, EquipmentResponse, UpdateEquipmentRequest};
pub use rental::{CreateRentalRequest, RentalCreatedResponse, UpdateRentalRequest};
