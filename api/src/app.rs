//! Application state and factory
//!
//! Builds the Actix-web application from injected domain services. The
//! state is generic over the persistence and mail ports so tests can run
//! the full HTTP surface against the in-memory store.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use eq_core::repositories::{
    EquipmentRepository, RentalRepository, RentalStore, UserRepository,
};
use eq_core::services::{
    AuthService, EquipmentService, Mailer, RentalService, TokenService,
};
use eq_shared::types::response::error_codes;
use eq_shared::ErrorResponse;

use crate::middleware::{cors::create_cors, JwtAuth};
use crate::routes::{account, auth, equipment, rentals};

/// Shared services injected into request handlers
pub struct AppState<U, E, R, S, M>
where
    U: UserRepository,
    E: EquipmentRepository,
    R: RentalRepository,
    S: RentalStore,
    M: Mailer,
{
    pub auth_service: Arc<AuthService<U, M>>,
    pub equipment_service: Arc<EquipmentService<E>>,
    pub rental_service: Arc<RentalService<U, E, R, S>>,
    pub token_service: Arc<TokenService>,
}

/// Create and configure the application with all routes and middleware
///
/// `/register` and `/login` are open; everything else sits behind JWT
/// authentication.
pub fn create_app<U, E, R, S, M>(
    app_state: web::Data<AppState<U, E, R, S, M>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    E: EquipmentRepository + 'static,
    R: RentalRepository + 'static,
    S: RentalStore + 'static,
    M: Mailer + 'static,
{
    let tokens = Arc::clone(&app_state.token_service);

    App::new()
        .app_data(app_state)
        .app_data(json_config())
        .wrap(Logger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health_check))
        .route("/register", web::post().to(auth::register::<U, E, R, S, M>))
        .route("/login", web::post().to(auth::login::<U, E, R, S, M>))
        .service(
            web::scope("")
                .wrap(JwtAuth::new(tokens))
                .route("/top-up", web::post().to(account::top_up::<U, E, R, S, M>))
                .route(
                    "/equipment",
                    web::get().to(equipment::list::<U, E, R, S, M>),
                )
                .route(
                    "/equipment",
                    web::post().to(equipment::create::<U, E, R, S, M>),
                )
                .route(
                    "/equipment/{id}",
                    web::put().to(equipment::update::<U, E, R, S, M>),
                )
                .route(
                    "/equipment/{id}",
                    web::delete().to(equipment::delete::<U, E, R, S, M>),
                )
                .route("/rental", web::get().to(rentals::list::<U, E, R, S, M>))
                .route("/rental", web::post().to(rentals::create::<U, E, R, S, M>))
                .route(
                    "/rental/{id}",
                    web::put().to(rentals::update::<U, E, R, S, M>),
                )
                .route(
                    "/rental/{id}",
                    web::delete().to(rentals::delete::<U, E, R, S, M>),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// JSON extractor configuration
///
/// A body that fails to deserialize produces the same error envelope as
/// every other failure instead of Actix's plain-text default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(
            error_codes::INVALID_REQUEST_BODY,
            err.to_string(),
        ));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "equiprent-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
