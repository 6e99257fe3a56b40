//! Usuarios Service Library
//!
//! User registration, login and profile maintenance over HTTP.
//! It can be run as a standalone service or embedded in the combined binary.

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tracing::info;

use common::{MigrateAction, ServiceConfig};

use crate::api::{create_router, AppState};
use crate::config::UsuariosServiceConfig;
use crate::infra::Database;
use crate::repository::UsuarioStore;
use crate::service::UsuarioManager;

/// Run the usuarios service as an embedded component (for combined binary).
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = UsuariosServiceConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UsuariosServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;
    db.apply(action).await?;
    Ok(())
}

/// Wire repository, service and routes on top of an open connection.
pub fn build_app(db: DatabaseConnection, config: &ServiceConfig) -> Router {
    let usuario_repo = Arc::new(UsuarioStore::new(db));
    let usuario_service = Arc::new(UsuarioManager::new(usuario_repo));
    create_router(AppState::new(usuario_service), config)
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: UsuariosServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    let app = build_app(db.get_connection(), &config.service);

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    info!("Usuarios service listening on {}{}", addr, api::BASE_PATH);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
