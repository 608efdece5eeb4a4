//! Equipment catalog request and response bodies

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use eq_core::domain::entities::Equipment;
use eq_core::services::{EquipmentUpdate, NewEquipment};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEquipmentRequest {
    #[validate(length(min = 1, max = 255, message = "must not be empty"))]
    pub name: String,

    pub availability: bool,

    pub rental_costs: Decimal,

    #[validate(length(max = 255))]
    pub category: String,
}

impl From<CreateEquipmentRequest> for NewEquipment {
    fn from(request: CreateEquipmentRequest) -> Self {
        NewEquipment {
            name: request.name,
            availability: request.availability,
            rental_cost: request.rental_costs,
            category: request.category,
        }
    }
}

/// Update body; empty `name`/`category` leave the stored value unchanged
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEquipmentRequest {
    #[serde(default)]
    pub name: String,

    pub availability: bool,

    pub rental_costs: Decimal,

    #[serde(default)]
    pub category: String,
}

impl From<UpdateEquipmentRequest> for EquipmentUpdate {
    fn from(request: UpdateEquipmentRequest) -> Self {
        EquipmentUpdate {
            name: request.name,
            availability: request.availability,
            rental_cost: request.rental_costs,
            category: request.category,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EquipmentResponse {
    pub message: String,
    pub data: Equipment,
}
