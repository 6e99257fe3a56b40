//! Mascota handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use common::{AppResult, JsonBody, OptionExt, QueryParams};
use domain::{ActualizarMascota, Mascota, NuevaMascota};

use super::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PerteneceResponse {
    pub pertenece: bool,
}

/// Inclusive age range
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RangoEdad {
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BusquedaNombre {
    /// Case-insensitive fragment of the pet's name
    pub nombre: String,
}

/// List all pets
#[utoipa::path(
    get,
    path = "/api/mascotas",
    tag = "Mascotas",
    responses((status = 200, description = "All pets", body = Vec<Mascota>))
)]
pub async fn list_mascotas(State(state): State<AppState>) -> AppResult<Json<Vec<Mascota>>> {
    Ok(Json(state.mascotas.list_mascotas().await?))
}

/// Get pet by ID
#[utoipa::path(
    get,
    path = "/api/mascotas/{id}",
    tag = "Mascotas",
    params(("id" = String, Path, description = "Pet ID")),
    responses(
        (status = 200, description = "Pet found", body = Mascota),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn get_mascota(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Mascota>> {
    let mascota = state.mascotas.get_mascota(&id).await?.ok_or_not_found()?;
    Ok(Json(mascota))
}

/// List a user's pets
#[utoipa::path(
    get,
    path = "/api/mascotas/usuario/{usuarioId}",
    tag = "Mascotas",
    params(("usuarioId" = String, Path, description = "Owner ID")),
    responses((status = 200, description = "Pets of the user", body = Vec<Mascota>))
)]
pub async fn list_by_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<String>,
) -> AppResult<Json<Vec<Mascota>>> {
    Ok(Json(state.mascotas.list_by_usuario(&usuario_id).await?))
}

/// Count a user's pets
#[utoipa::path(
    get,
    path = "/api/mascotas/usuario/{usuarioId}/count",
    tag = "Mascotas",
    params(("usuarioId" = String, Path, description = "Owner ID")),
    responses((status = 200, description = "Number of pets", body = CountResponse))
)]
pub async fn count_by_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<String>,
) -> AppResult<Json<CountResponse>> {
    let count = state.mascotas.count_by_usuario(&usuario_id).await?;
    Ok(Json(CountResponse { count }))
}

/// List a user's pets of one species
#[utoipa::path(
    get,
    path = "/api/mascotas/usuario/{usuarioId}/especie/{especie}",
    tag = "Mascotas",
    params(
        ("usuarioId" = String, Path, description = "Owner ID"),
        ("especie" = String, Path, description = "Species, exact match")
    ),
    responses((status = 200, description = "Matching pets", body = Vec<Mascota>))
)]
pub async fn list_by_usuario_and_especie(
    State(state): State<AppState>,
    Path((usuario_id, especie)): Path<(String, String)>,
) -> AppResult<Json<Vec<Mascota>>> {
    Ok(Json(
        state
            .mascotas
            .list_by_usuario_and_especie(&usuario_id, &especie)
            .await?,
    ))
}

/// List pets of one species
#[utoipa::path(
    get,
    path = "/api/mascotas/especie/{especie}",
    tag = "Mascotas",
    params(("especie" = String, Path, description = "Species, exact match")),
    responses((status = 200, description = "Matching pets", body = Vec<Mascota>))
)]
pub async fn list_by_especie(
    State(state): State<AppState>,
    Path(especie): Path<String>,
) -> AppResult<Json<Vec<Mascota>>> {
    Ok(Json(state.mascotas.list_by_especie(&especie).await?))
}

/// List pets within an age range
#[utoipa::path(
    get,
    path = "/api/mascotas/edad",
    tag = "Mascotas",
    params(RangoEdad),
    responses(
        (status = 200, description = "Matching pets", body = Vec<Mascota>),
        (status = 400, description = "Missing or non-numeric bounds")
    )
)]
pub async fn list_by_edad(
    State(state): State<AppState>,
    QueryParams(rango): QueryParams<RangoEdad>,
) -> AppResult<Json<Vec<Mascota>>> {
    Ok(Json(state.mascotas.list_by_edad(rango.min, rango.max).await?))
}

/// Search pets by name fragment
#[utoipa::path(
    get,
    path = "/api/mascotas/buscar",
    tag = "Mascotas",
    params(BusquedaNombre),
    responses((status = 200, description = "Matching pets", body = Vec<Mascota>))
)]
pub async fn search_by_nombre(
    State(state): State<AppState>,
    QueryParams(busqueda): QueryParams<BusquedaNombre>,
) -> AppResult<Json<Vec<Mascota>>> {
    Ok(Json(state.mascotas.search_by_nombre(&busqueda.nombre).await?))
}

/// Check whether a pet belongs to a user
#[utoipa::path(
    get,
    path = "/api/mascotas/{id}/usuario/{usuarioId}",
    tag = "Mascotas",
    params(
        ("id" = String, Path, description = "Pet ID"),
        ("usuarioId" = String, Path, description = "Owner ID")
    ),
    responses((status = 200, description = "Ownership flag", body = PerteneceResponse))
)]
pub async fn pertenece_a_usuario(
    State(state): State<AppState>,
    Path((id, usuario_id)): Path<(String, String)>,
) -> AppResult<Json<PerteneceResponse>> {
    let pertenece = state.mascotas.belongs_to_usuario(&id, &usuario_id).await?;
    Ok(Json(PerteneceResponse { pertenece }))
}

/// Create a pet
#[utoipa::path(
    post,
    path = "/api/mascotas",
    tag = "Mascotas",
    request_body = NuevaMascota,
    responses(
        (status = 201, description = "Pet created", body = Mascota),
        (status = 400, description = "Validation error"),
        (status = 409, description = "ID already taken")
    )
)]
pub async fn create_mascota(
    State(state): State<AppState>,
    JsonBody(datos): JsonBody<NuevaMascota>,
) -> AppResult<(StatusCode, Json<Mascota>)> {
    let mascota = state.mascotas.create_mascota(datos).await?;
    Ok((StatusCode::CREATED, Json(mascota)))
}

/// Update a pet
#[utoipa::path(
    put,
    path = "/api/mascotas/{id}",
    tag = "Mascotas",
    params(("id" = String, Path, description = "Pet ID")),
    request_body = ActualizarMascota,
    responses(
        (status = 200, description = "Pet updated", body = Mascota),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn update_mascota(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(cambios): JsonBody<ActualizarMascota>,
) -> AppResult<Json<Mascota>> {
    Ok(Json(state.mascotas.update_mascota(&id, cambios).await?))
}

/// Delete a pet
#[utoipa::path(
    delete,
    path = "/api/mascotas/{id}",
    tag = "Mascotas",
    params(("id" = String, Path, description = "Pet ID")),
    responses(
        (status = 204, description = "Pet deleted"),
        (status = 404, description = "Pet not found")
    )
)]
pub async fn delete_mascota(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.mascotas.delete_mascota(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
