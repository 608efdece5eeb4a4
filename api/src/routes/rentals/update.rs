//! Handler for PUT /rental/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use eq_core::repositories::{
    EquipmentRepository, RentalRepository, RentalStore, UserRepository,
};
use eq_core::services::Mailer;

use crate::app::AppState;
use crate::dto::rental::UpdateRentalRequest;
use crate::handlers::domain_error_response;

/// Overwrites every field of a rental history record
pub async fn update<U, E, R, S, M>(
    state: web::Data<AppState<U, E, R, S, M>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateRentalRequest>,
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
        .update_rental(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(record) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Rental history updated successfully",
            "data": record,
        })),
        Err(error) => domain_error_response(&error),
    }
}
