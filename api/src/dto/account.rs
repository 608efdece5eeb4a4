//! Account balance request and response bodies

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use eq_core::domain::entities::User;

#[derive(Debug, Clone, Deserialize)]
pub struct TopUpRequest {
    pub deposit_amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopUpResponse {
    pub message: String,
    pub user: User,
}
