//! Handler for POST /top-up

use actix_web::{web, HttpResponse};

use eq_core::repositories::{
    EquipmentRepository, RentalRepository, RentalStore, UserRepository,
};
use eq_core::services::Mailer;

use crate::app::AppState;
use crate::dto::account::{TopUpRequest, TopUpResponse};
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;

/// Credits the authenticated caller's deposit balance
pub async fn top_up<U, E, R, S, M>(
    state: web::Data<AppState<U, E, R, S, M>>,
    auth: AuthContext,
    request: web::Json<TopUpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    E: EquipmentRepository + 'static,
    R: RentalRepository + 'static,
    S: RentalStore + 'static,
    M: Mailer + 'static,
{
    match state
        .auth_service
        .top_up(auth.user_id, request.deposit_amount)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(TopUpResponse {
            message: "Top-up successful".to_string(),
            user,
        }),
        Err(error) => domain_error_response(&error),
    }
}
