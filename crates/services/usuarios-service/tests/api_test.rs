//! HTTP integration tests for the usuarios API.
//!
//! Every test builds the full stack (router, service, SeaORM store) on a
//! fresh in-memory SQLite database.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{DatabaseConfig, ServiceConfig};
use usuarios_service_lib::{build_app, infra::Database};

// =============================================================================
// Helpers
// =============================================================================

async fn app() -> Router {
    let db = Database::connect(&DatabaseConfig::sqlite_memory())
        .await
        .expect("sqlite in memory");
    let config = ServiceConfig {
        service_name: "microservicio-usuarios".to_string(),
        host: "127.0.0.1".to_string(),
        port: 8080,
    };
    build_app(db.get_connection(), &config)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn registro(email: &str) -> Value {
    json!({
        "nombre": "Juan Pérez",
        "email": email,
        "password": "secret123"
    })
}

// =============================================================================
// Registration & lookup
// =============================================================================

#[tokio::test]
async fn test_register_then_get() {
    let app = app().await;

    let (status, creado) = send(&app, "POST", "/api/usuarios/registro", Some(registro("juan@test.com"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(creado["email"], "juan@test.com");
    assert_eq!(creado["rol"], "Cliente");
    assert!(creado.get("password").is_none());
    assert!(creado.get("passwordHash").is_none());
    assert!(creado["fechaRegistro"].is_string());

    let id = creado["id"].as_str().unwrap();
    let (status, leido) = send(&app, "GET", &format!("/api/usuarios/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(leido["nombre"], "Juan Pérez");

    let (status, por_email) = send(&app, "GET", "/api/usuarios/email/juan@test.com", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(por_email["id"], id);

    let (_, existe) = send(&app, "GET", "/api/usuarios/email/juan@test.com/existe", None).await;
    assert_eq!(existe, json!({"existe": true}));

    let (_, no_existe) = send(&app, "GET", "/api/usuarios/email/otro@test.com/existe", None).await;
    assert_eq!(no_existe, json!({"existe": false}));
}

#[tokio::test]
async fn test_post_root_is_registration_alias() {
    let app = app().await;

    let mut body = registro("alias@test.com");
    body["id"] = json!("user123");
    let (status, creado) = send(&app, "POST", "/api/usuarios", Some(body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(creado["id"], "user123");
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = app().await;
    send(&app, "POST", "/api/usuarios/registro", Some(registro("juan@test.com"))).await;

    let (status, body) = send(&app, "POST", "/api/usuarios/registro", Some(registro("juan@test.com"))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let (_, todos) = send(&app, "GET", "/api/usuarios", None).await;
    assert_eq!(todos.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_registration_reports_fields() {
    let app = app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/usuarios/registro",
        Some(json!({"nombre": "  ", "email": "no-es-email", "password": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["fields"]["email"].is_array());
    assert!(body["error"]["fields"]["nombre"].is_array());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/usuarios/registro")
        .header("content-type", "application/json")
        .body(Body::from("{\"email\":"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_user_is_404() {
    let app = app().await;

    let (status, _) = send(&app, "GET", "/api/usuarios/no-existe", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/usuarios/email/nadie@test.com", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_empty() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/api/usuarios", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login() {
    let app = app().await;
    send(&app, "POST", "/api/usuarios/registro", Some(registro("juan@test.com"))).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/usuarios/login",
        Some(json!({"email": "juan@test.com", "password": "secret123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "juan@test.com");

    let (status, body) = send(
        &app,
        "POST",
        "/api/usuarios/login",
        Some(json!({"email": "juan@test.com", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");

    let (status, _) = send(
        &app,
        "POST",
        "/api/usuarios/login",
        Some(json!({"email": "nadie@test.com", "password": "secret123"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Update & delete
// =============================================================================

#[tokio::test]
async fn test_update_keeps_password_and_email() {
    let app = app().await;
    let (_, creado) = send(&app, "POST", "/api/usuarios/registro", Some(registro("juan@test.com"))).await;
    let id = creado["id"].as_str().unwrap();

    let (status, actualizado) = send(
        &app,
        "PUT",
        &format!("/api/usuarios/{id}"),
        Some(json!({"nombre": "Juan Actualizado", "fotoPerfilUri": "content://perfil"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(actualizado["nombre"], "Juan Actualizado");
    assert_eq!(actualizado["email"], "juan@test.com");
    assert_eq!(actualizado["rol"], "Cliente");
    assert_eq!(actualizado["fotoPerfilUri"], "content://perfil");
    assert_eq!(actualizado["fechaRegistro"], creado["fechaRegistro"]);

    let (status, _) = send(
        &app,
        "POST",
        "/api/usuarios/login",
        Some(json!({"email": "juan@test.com", "password": "secret123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_replaces_password() {
    let app = app().await;
    let (_, creado) = send(&app, "POST", "/api/usuarios/registro", Some(registro("juan@test.com"))).await;
    let id = creado["id"].as_str().unwrap();

    send(
        &app,
        "PUT",
        &format!("/api/usuarios/{id}"),
        Some(json!({"nombre": "Juan", "password": "nueva456"})),
    )
    .await;

    let (old, _) = send(
        &app,
        "POST",
        "/api/usuarios/login",
        Some(json!({"email": "juan@test.com", "password": "secret123"})),
    )
    .await;
    let (new, _) = send(
        &app,
        "POST",
        "/api/usuarios/login",
        Some(json!({"email": "juan@test.com", "password": "nueva456"})),
    )
    .await;
    assert_eq!(old, StatusCode::UNAUTHORIZED);
    assert_eq!(new, StatusCode::OK);
}

#[tokio::test]
async fn test_update_missing_is_404() {
    let app = app().await;

    let (status, _) = send(
        &app,
        "PUT",
        "/api/usuarios/no-existe",
        Some(json!({"nombre": "Nadie"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = app().await;
    let (_, creado) = send(&app, "POST", "/api/usuarios/registro", Some(registro("juan@test.com"))).await;
    let uri = format!("/api/usuarios/{}", creado["id"].as_str().unwrap());

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Ambient routes
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/api/usuarios/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "UP", "service": "microservicio-usuarios", "port": "8080"})
    );
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app().await;

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/usuarios/login"].is_object());
}
