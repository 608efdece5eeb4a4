//! Handler for DELETE /equipment/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use eq_core::repositories::{
    EquipmentRepository, RentalRepository, RentalStore, UserRepository,
};
use eq_core::services::Mailer;

use crate::app::AppState;
use crate::handlers::domain_error_response;

/// Removes a unit from the catalog
pub async fn delete<U, E, R, S, M>(
    state: web::Data<AppState<U, E, R, S, M>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EquipmentRepository + 'static,
    R: RentalRepository + 'static,
    S: RentalStore + 'static,
    M: Mailer + 'static,
{
    match state.equipment_service.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Equipment deleted successfully"
        })),
        Err(error) => domain_error_response(&error),
    }
}
