//! Rental request and response bodies

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use eq_core::services::{NewRental, RentalUpdate};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRentalRequest {
    pub user_id: Uuid,
    pub equipment_id: Uuid,
    pub rental_date: DateTime<Utc>,
    #[serde(default)]
    pub return_date: Option<DateTime<Utc>>,
    #[serde(default = "default_status")]
    pub rental_status: String,
}

fn default_status() -> String {
    "ongoing".to_string()
}

impl From<CreateRentalRequest> for NewRental {
    fn from(request: CreateRentalRequest) -> Self {
        NewRental {
            user_id: request.user_id,
            equipment_id: request.equipment_id,
            rental_date: request.rental_date,
            return_date: request.return_date,
            status: request.rental_status,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRentalRequest {
    pub user_id: Uuid,
    pub equipment_id: Uuid,
    pub rental_date: DateTime<Utc>,
    #[serde(default)]
    pub return_date: Option<DateTime<Utc>>,
    pub rental_status: String,
}

impl From<UpdateRentalRequest> for RentalUpdate {
    fn from(request: UpdateRentalRequest) -> Self {
        RentalUpdate {
            user_id: request.user_id,
            equipment_id: request.equipment_id,
            rental_date: request.rental_date,
            return_date: request.return_date,
            status: request.rental_status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RentalCreatedResponse {
    pub message: String,
    pub user_deposit_now: Decimal,
}
