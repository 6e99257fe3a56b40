//! Route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{cors_layer, health_routes, ServiceConfig};

use super::handlers;
use super::openapi::ApiDoc;
use super::state::AppState;

pub const BASE_PATH: &str = "/api/mascotas";

fn mascota_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_mascotas).post(handlers::create_mascota))
        .route("/edad", get(handlers::list_by_edad))
        .route("/buscar", get(handlers::search_by_nombre))
        .route("/especie/:especie", get(handlers::list_by_especie))
        .route("/usuario/:usuario_id", get(handlers::list_by_usuario))
        .route("/usuario/:usuario_id/count", get(handlers::count_by_usuario))
        .route(
            "/usuario/:usuario_id/especie/:especie",
            get(handlers::list_by_usuario_and_especie),
        )
        .route(
            "/:id",
            get(handlers::get_mascota)
                .put(handlers::update_mascota)
                .delete(handlers::delete_mascota),
        )
        .route("/:id/usuario/:usuario_id", get(handlers::pertenece_a_usuario))
}

/// Create the main router with all routes.
pub fn create_router(state: AppState, config: &ServiceConfig) -> Router {
    Router::new()
        .nest(BASE_PATH, mascota_routes().merge(health_routes(config)))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
