//! HTTP plumbing shared by the three services: CORS and the health route.

use axum::{http::Method, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServiceConfig;

/// Liveness payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub port: String,
}

/// `GET /health`, always 200. Mounted under the service base path.
pub fn health_routes<S>(config: &ServiceConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let body = HealthResponse {
        status: "UP",
        service: config.service_name.clone(),
        port: config.port.to_string(),
    };

    Router::new().route(
        "/health",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    )
}

/// Permissive CORS: any origin, any header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_reports_service_and_port() {
        let config = ServiceConfig {
            service_name: "microservicio-mascotas".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8081,
        };
        let app: Router = health_routes(&config);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "UP");
        assert_eq!(json["service"], "microservicio-mascotas");
        assert_eq!(json["port"], "8081");
    }
}
