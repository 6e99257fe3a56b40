//! Route configuration.

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{cors_layer, health_routes, ServiceConfig};

use super::handlers;
use super::openapi::ApiDoc;
use super::state::AppState;

pub const BASE_PATH: &str = "/api/horas-agendadas";

fn hora_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_horas).post(handlers::create_hora))
        .route("/fecha", get(handlers::list_by_fecha))
        .route("/tipo/:tipo", get(handlers::list_by_tipo))
        .route("/estado/:estado", get(handlers::list_by_estado))
        .route("/estado/:estado/count", get(handlers::count_by_estado))
        .route("/mascota/:mascota_id", get(handlers::list_by_mascota))
        .route("/usuario/:usuario_id", get(handlers::list_by_usuario))
        .route("/usuario/:usuario_id/count", get(handlers::count_by_usuario))
        .route(
            "/usuario/:usuario_id/estado/:estado",
            get(handlers::list_by_usuario_and_estado),
        )
        .route(
            "/:id",
            get(handlers::get_hora)
                .put(handlers::update_hora)
                .delete(handlers::delete_hora),
        )
        .route("/:id/estado", patch(handlers::change_estado))
}

/// Create the main router with all routes.
pub fn create_router(state: AppState, config: &ServiceConfig) -> Router {
    Router::new()
        .nest(BASE_PATH, hora_routes().merge(health_routes(config)))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
