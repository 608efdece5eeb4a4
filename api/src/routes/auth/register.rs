//! Handler for POST /register

use actix_web::{web, HttpResponse};
use validator::Validate;

use eq_core::repositories::{
    EquipmentRepository, RentalRepository, RentalStore, UserRepository,
};
use eq_core::services::Mailer;

use crate::app::AppState;
use crate::dto::auth::{RegisterRequest, RegisterResponse};
use crate::handlers::{domain_error_response, validation_error_response};

/// Creates a user account and sends the welcome mail
pub async fn register<U, E, R, S, M>(
    state: web::Data<AppState<U, E, R, S, M>>,
    request: web::Json<RegisterRequest>,
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
        .auth_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(_) => HttpResponse::Ok().json(RegisterResponse {
            message: "User registered successfully".to_string(),
        }),
        Err(error) => domain_error_response(&error),
    }
}
