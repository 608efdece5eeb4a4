//! Handler for POST /login

use actix_web::{web, HttpResponse};
use validator::Validate;

use eq_core::repositories::{
    EquipmentRepository, RentalRepository, RentalStore, UserRepository,
};
use eq_core::services::Mailer;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::{domain_error_response, validation_error_response};

/// Verifies credentials and issues a bearer token
pub async fn login<U, E, R, S, M>(
    state: web::Data<AppState<U, E, R, S, M>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email, &request.password)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(LoginResponse {
            message: "Login successful".to_string(),
            token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
        }),
        Err(error) => domain_error_response(&error),
    }
}
