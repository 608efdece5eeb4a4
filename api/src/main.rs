//! EquipRent API server entry point
//!
//! Wires the MySQL repositories, mail gateway, and domain services
//! together and serves the HTTP surface.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use eq_api::{create_app, AppState};
use eq_core::services::{
    AuthService, EquipmentService, RentalService, TokenService, TokenServiceConfig,
};
use eq_infra::database::{
    DatabasePool, MySqlEquipmentRepository, MySqlRentalRepository, MySqlUserRepository,
};
use eq_infra::email::AppMailer;
use eq_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!(
        "Starting EquipRent API server ({:?} environment)",
        config.environment
    );

    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the insecure default. Do not run like this in production.");
    }

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    info!("{}", pool.get_statistics());

    let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let equipment = Arc::new(MySqlEquipmentRepository::new(pool.get_pool().clone()));
    let rentals = Arc::new(MySqlRentalRepository::new(pool.get_pool().clone()));

    let mailer = Arc::new(AppMailer::from_config(&config.email));
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(
        &config.auth.jwt,
    )));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&users),
        Arc::clone(&mailer),
        Arc::clone(&token_service),
    ));
    let equipment_service = Arc::new(EquipmentService::new(Arc::clone(&equipment)));
    let rental_service = Arc::new(RentalService::new(
        Arc::clone(&users),
        Arc::clone(&equipment),
        Arc::clone(&rentals),
        Arc::clone(&rentals),
    ));

    let app_state = web::Data::new(AppState {
        auth_service,
        equipment_service,
        rental_service,
        token_service,
    });

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
