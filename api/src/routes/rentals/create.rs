//! Handler for POST /rental
//!
//! The rental creation endpoint. All precondition checks and the atomic
//! state transition happen in the rental service; this handler only
//! binds the body and shapes the response.

use actix_web::{web, HttpResponse};

use eq_core::repositories::{
    EquipmentRepository, RentalRepository, RentalStore, UserRepository,
};
use eq_core::services::Mailer;

use crate::app::AppState;
use crate::dto::rental::{CreateRentalRequest, RentalCreatedResponse};
use crate::handlers::domain_error_response;

/// Rents a unit: debits the deposit, flips availability, records history
pub async fn create<U, E, R, S, M>(
    state: web::Data<AppState<U, E, R, S, M>>,
    request: web::Json<CreateRentalRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EquipmentRepository + 'static,
    R: RentalRepository + 'static,
    S: RentalStore + 'static,
    M: Mailer + 'static,
{
    match state
        .rental_service
        .create_rental(request.into_inner().into())
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(RentalCreatedResponse {
            message: "Equipment rented successfully".to_string(),
            user_deposit_now: outcome.deposit_balance,
        }),
        Err(error) => domain_error_response(&error),
    }
}
