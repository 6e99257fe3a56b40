//! Usuario handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use common::{AppError, AppResult, JsonBody, OptionExt};
use domain::{ActualizarUsuario, Credenciales, NuevoUsuario, Usuario};

use super::state::AppState;

/// Email availability check result
#[derive(Debug, Serialize, ToSchema)]
pub struct ExisteResponse {
    pub existe: bool,
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/usuarios",
    tag = "Usuarios",
    responses(
        (status = 200, description = "All registered users", body = Vec<Usuario>)
    )
)]
pub async fn list_usuarios(State(state): State<AppState>) -> AppResult<Json<Vec<Usuario>>> {
    Ok(Json(state.usuarios.list_usuarios().await?))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = Usuario),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_usuario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Usuario>> {
    let usuario = state.usuarios.get_usuario(&id).await?.ok_or_not_found()?;
    Ok(Json(usuario))
}

/// Get user by email
#[utoipa::path(
    get,
    path = "/api/usuarios/email/{email}",
    tag = "Usuarios",
    params(("email" = String, Path, description = "Exact email address")),
    responses(
        (status = 200, description = "User found", body = Usuario),
        (status = 404, description = "No user with that email")
    )
)]
pub async fn get_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Usuario>> {
    let usuario = state.usuarios.get_by_email(&email).await?.ok_or_not_found()?;
    Ok(Json(usuario))
}

/// Check whether an email is already registered
#[utoipa::path(
    get,
    path = "/api/usuarios/email/{email}/existe",
    tag = "Usuarios",
    params(("email" = String, Path, description = "Email address")),
    responses(
        (status = 200, description = "Availability flag", body = ExisteResponse)
    )
)]
pub async fn email_existe(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<ExisteResponse>> {
    let existe = state.usuarios.email_exists(&email).await?;
    Ok(Json(ExisteResponse { existe }))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/usuarios/registro",
    tag = "Usuarios",
    request_body = NuevoUsuario,
    responses(
        (status = 201, description = "User registered", body = Usuario),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email or ID already registered")
    )
)]
pub async fn registrar(
    State(state): State<AppState>,
    JsonBody(datos): JsonBody<NuevoUsuario>,
) -> AppResult<(StatusCode, Json<Usuario>)> {
    let usuario = state.usuarios.register(datos).await?;
    Ok((StatusCode::CREATED, Json(usuario)))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/usuarios/login",
    tag = "Usuarios",
    request_body = Credenciales,
    responses(
        (status = 200, description = "Credentials accepted", body = Usuario),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(credenciales): JsonBody<Credenciales>,
) -> AppResult<Json<Usuario>> {
    let usuario = state
        .usuarios
        .login(&credenciales.email, &credenciales.password)
        .await?
        .ok_or(AppError::InvalidCredentials)?;
    Ok(Json(usuario))
}

/// Update user profile
#[utoipa::path(
    put,
    path = "/api/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = String, Path, description = "User ID")),
    request_body = ActualizarUsuario,
    responses(
        (status = 200, description = "User updated", body = Usuario),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_usuario(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(cambios): JsonBody<ActualizarUsuario>,
) -> AppResult<Json<Usuario>> {
    Ok(Json(state.usuarios.update_usuario(&id, cambios).await?))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/api/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_usuario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.usuarios.delete_usuario(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
