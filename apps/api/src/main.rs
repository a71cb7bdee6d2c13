//! ShelfLine API - REST server over the inventory and user domains

use axum::{Json, Router, routing::get};
use axum_helpers::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_inventory::{InMemoryProductRepository, InventoryService, handlers as product_handlers};
use domain_users::{
    CreateUser, InMemoryUserRepository, UserError, UserService, handlers as user_handlers,
};
use tracing::{info, warn};
use utoipa::OpenApi;

mod config;
mod openapi;

use config::Config;

/// Seed the administrator account so a fresh process is usable.
async fn seed_admin(
    users: &UserService<InMemoryUserRepository>,
    config: &Config,
) -> eyre::Result<()> {
    let result = users
        .add_user(CreateUser {
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
            role: "admin".to_string(),
        })
        .await;

    match result {
        Ok(user) => info!(username = %user.username, "Seeded administrator account"),
        Err(UserError::DuplicateUsername(_)) => {
            warn!("Administrator account already present, skipping seed");
        }
        Err(e) => return Err(eyre::eyre!("Failed to seed administrator: {}", e)),
    }

    Ok(())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let inventory = InventoryService::new(InMemoryProductRepository::new());
    let users = UserService::new(InMemoryUserRepository::new());

    seed_admin(&users, &config).await?;

    let app = Router::new()
        .nest("/api/products", product_handlers::router(inventory))
        .nest("/api/users", user_handlers::router(users))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(health_router());

    info!("Starting ShelfLine API on {}", config.server.address());
    create_app(app, &config.server).await?;

    info!("ShelfLine API shutdown complete");
    Ok(())
}
