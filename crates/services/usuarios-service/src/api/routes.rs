//! Route configuration.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{cors_layer, health_routes, ServiceConfig};

use super::handlers;
use super::openapi::ApiDoc;
use super::state::AppState;

pub const BASE_PATH: &str = "/api/usuarios";

/// Create usuario routes
fn usuario_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_usuarios).post(handlers::registrar))
        .route("/registro", post(handlers::registrar))
        .route("/login", post(handlers::login))
        .route("/email/:email", get(handlers::get_by_email))
        .route("/email/:email/existe", get(handlers::email_existe))
        .route(
            "/:id",
            get(handlers::get_usuario)
                .put(handlers::update_usuario)
                .delete(handlers::delete_usuario),
        )
}

/// Create the main router with all routes.
pub fn create_router(state: AppState, config: &ServiceConfig) -> Router {
    Router::new()
        .nest(BASE_PATH, usuario_routes().merge(health_routes(config)))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
