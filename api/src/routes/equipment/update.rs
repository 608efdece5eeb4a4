//! Handler for PUT /equipment/{id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use eq_core::repositories::{
    EquipmentRepository, RentalRepository, RentalStore, UserRepository,
};
use eq_core::services::Mailer;

use crate::app::AppState;
use crate::dto::equipment::{EquipmentResponse, UpdateEquipmentRequest};
use crate::handlers::domain_error_response;

/// Updates a catalog unit
///
/// Empty `name`/`category` leave those fields unchanged; `availability`
/// and `rental_costs` are always written.
pub async fn update<U, E, R, S, M>(
    state: web::Data<AppState<U, E, R, S, M>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateEquipmentRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EquipmentRepository + 'static,
    R: RentalRepository + 'static,
    S: RentalStore + 'static,
    M: Mailer + 'static,
{
    match state
        .equipment_service
        .update(path.into_inner(), request.into_inner().into())
        .await
    {
        Ok(equipment) => HttpResponse::Ok().json(EquipmentResponse {
            message: "Equipment updated successfully".to_string(),
            data: equipment,
        }),
        Err(error) => domain_error_response(&error),
    }
}
