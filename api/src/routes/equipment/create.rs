//! Handler for POST /equipment

use actix_web::{web, HttpResponse};
use validator::Validate;

use eq_core::repositories::{
    EquipmentRepository, RentalRepository, RentalStore, UserRepository,
};
use eq_core::services::Mailer;

use crate::app::AppState;
use crate::dto::equipment::{CreateEquipmentRequest, EquipmentResponse};
use crate::handlers::{domain_error_response, validation_error_response};

/// Adds a unit to the catalog
pub async fn create<U, E, R, S, M>(
    state: web::Data<AppState<U, E, R, S, M>>,
    request: web::Json<CreateEquipmentRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EquipmentRepository + 'static,
    R: RentalRepository + 'static,
    S: RentalStore + 'static,
    M: Mailer + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .equipment_service
        .create(request.into_inner().into())
        .await
    {
        Ok(equipment) => HttpResponse::Ok().json(EquipmentResponse {
            message: "Equipment created successfully".to_string(),
            data: equipment,
        }),
        Err(error) => domain_error_response(&error),
    }
}
