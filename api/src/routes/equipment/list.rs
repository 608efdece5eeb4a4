//! Handler for GET /equipment

use actix_web::{web, HttpResponse};

use eq_core::repositories::{
    EquipmentRepository, RentalRepository, RentalStore, UserRepository,
};
use eq_core::services::Mailer;

use crate::app::AppState;
use crate::handlers::domain_error_response;

/// Lists all catalog units
pub async fn list<U, E, R, S, M>(state: web::Data<AppState<U, E, R, S, M>>) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EquipmentRepository + 'static,
    R: RentalRepository + 'static,
    S: RentalStore + 'static,
    M: Mailer + 'static,
{
    match state.equipment_service.list().await {
        Ok(all) => HttpResponse::Ok().json(all),
        Err(error) => domain_error_response(&error),
    }
}
