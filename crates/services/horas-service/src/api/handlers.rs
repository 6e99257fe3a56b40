//! HoraAgendada handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use common::{AppResult, JsonBody, OptionExt, QueryParams};
use domain::{ActualizarHoraAgendada, CambioEstado, HoraAgendada, NuevaHoraAgendada};

use super::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CountResponse {
    pub count: u64,
}

/// Inclusive date range, epoch milliseconds
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RangoFecha {
    pub desde: i64,
    pub hasta: i64,
}

/// List all appointments
#[utoipa::path(
    get,
    path = "/api/horas-agendadas",
    tag = "HorasAgendadas",
    responses((status = 200, description = "All appointments", body = Vec<HoraAgendada>))
)]
pub async fn list_horas(State(state): State<AppState>) -> AppResult<Json<Vec<HoraAgendada>>> {
    Ok(Json(state.horas.list_horas().await?))
}

/// Get appointment by ID
#[utoipa::path(
    get,
    path = "/api/horas-agendadas/{id}",
    tag = "HorasAgendadas",
    params(("id" = String, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment found", body = HoraAgendada),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn get_hora(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<HoraAgendada>> {
    let hora = state.horas.get_hora(&id).await?.ok_or_not_found()?;
    Ok(Json(hora))
}

#[utoipa::path(
    get,
    path = "/api/horas-agendadas/usuario/{usuarioId}",
    tag = "HorasAgendadas",
    params(("usuarioId" = String, Path, description = "Owner ID")),
    responses((status = 200, description = "Appointments of the user", body = Vec<HoraAgendada>))
)]
pub async fn list_by_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<String>,
) -> AppResult<Json<Vec<HoraAgendada>>> {
    Ok(Json(state.horas.list_by_usuario(&usuario_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/horas-agendadas/usuario/{usuarioId}/count",
    tag = "HorasAgendadas",
    params(("usuarioId" = String, Path, description = "Owner ID")),
    responses((status = 200, description = "Number of appointments", body = CountResponse))
)]
pub async fn count_by_usuario(
    State(state): State<AppState>,
    Path(usuario_id): Path<String>,
) -> AppResult<Json<CountResponse>> {
    let count = state.horas.count_by_usuario(&usuario_id).await?;
    Ok(Json(CountResponse { count }))
}

#[utoipa::path(
    get,
    path = "/api/horas-agendadas/usuario/{usuarioId}/estado/{estado}",
    tag = "HorasAgendadas",
    params(
        ("usuarioId" = String, Path, description = "Owner ID"),
        ("estado" = String, Path, description = "Status, exact match")
    ),
    responses((status = 200, description = "Matching appointments", body = Vec<HoraAgendada>))
)]
pub async fn list_by_usuario_and_estado(
    State(state): State<AppState>,
    Path((usuario_id, estado)): Path<(String, String)>,
) -> AppResult<Json<Vec<HoraAgendada>>> {
    Ok(Json(
        state
            .horas
            .list_by_usuario_and_estado(&usuario_id, &estado)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/horas-agendadas/mascota/{mascotaId}",
    tag = "HorasAgendadas",
    params(("mascotaId" = String, Path, description = "Pet ID")),
    responses((status = 200, description = "Appointments of the pet", body = Vec<HoraAgendada>))
)]
pub async fn list_by_mascota(
    State(state): State<AppState>,
    Path(mascota_id): Path<String>,
) -> AppResult<Json<Vec<HoraAgendada>>> {
    Ok(Json(state.horas.list_by_mascota(&mascota_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/horas-agendadas/estado/{estado}",
    tag = "HorasAgendadas",
    params(("estado" = String, Path, description = "Status, exact match")),
    responses((status = 200, description = "Matching appointments", body = Vec<HoraAgendada>))
)]
pub async fn list_by_estado(
    State(state): State<AppState>,
    Path(estado): Path<String>,
) -> AppResult<Json<Vec<HoraAgendada>>> {
    Ok(Json(state.horas.list_by_estado(&estado).await?))
}

#[utoipa::path(
    get,
    path = "/api/horas-agendadas/estado/{estado}/count",
    tag = "HorasAgendadas",
    params(("estado" = String, Path, description = "Status, exact match")),
    responses((status = 200, description = "Number of appointments", body = CountResponse))
)]
pub async fn count_by_estado(
    State(state): State<AppState>,
    Path(estado): Path<String>,
) -> AppResult<Json<CountResponse>> {
    let count = state.horas.count_by_estado(&estado).await?;
    Ok(Json(CountResponse { count }))
}

#[utoipa::path(
    get,
    path = "/api/horas-agendadas/tipo/{tipo}",
    tag = "HorasAgendadas",
    params(("tipo" = String, Path, description = "Appointment type, exact match")),
    responses((status = 200, description = "Matching appointments", body = Vec<HoraAgendada>))
)]
pub async fn list_by_tipo(
    State(state): State<AppState>,
    Path(tipo): Path<String>,
) -> AppResult<Json<Vec<HoraAgendada>>> {
    Ok(Json(state.horas.list_by_tipo(&tipo).await?))
}

/// List appointments within a date range
#[utoipa::path(
    get,
    path = "/api/horas-agendadas/fecha",
    tag = "HorasAgendadas",
    params(RangoFecha),
    responses(
        (status = 200, description = "Matching appointments", body = Vec<HoraAgendada>),
        (status = 400, description = "Missing or non-numeric bounds")
    )
)]
pub async fn list_by_fecha(
    State(state): State<AppState>,
    QueryParams(rango): QueryParams<RangoFecha>,
) -> AppResult<Json<Vec<HoraAgendada>>> {
    Ok(Json(
        state.horas.list_by_fecha(rango.desde, rango.hasta).await?,
    ))
}

/// Book an appointment
#[utoipa::path(
    post,
    path = "/api/horas-agendadas",
    tag = "HorasAgendadas",
    request_body = NuevaHoraAgendada,
    responses(
        (status = 201, description = "Appointment created", body = HoraAgendada),
        (status = 400, description = "Validation error"),
        (status = 409, description = "ID already taken")
    )
)]
pub async fn create_hora(
    State(state): State<AppState>,
    JsonBody(datos): JsonBody<NuevaHoraAgendada>,
) -> AppResult<(StatusCode, Json<HoraAgendada>)> {
    let hora = state.horas.create_hora(datos).await?;
    Ok((StatusCode::CREATED, Json(hora)))
}

/// Update an appointment
#[utoipa::path(
    put,
    path = "/api/horas-agendadas/{id}",
    tag = "HorasAgendadas",
    params(("id" = String, Path, description = "Appointment ID")),
    request_body = ActualizarHoraAgendada,
    responses(
        (status = 200, description = "Appointment updated", body = HoraAgendada),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn update_hora(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(cambios): JsonBody<ActualizarHoraAgendada>,
) -> AppResult<Json<HoraAgendada>> {
    Ok(Json(state.horas.update_hora(&id, cambios).await?))
}

/// Change only the status of an appointment
#[utoipa::path(
    patch,
    path = "/api/horas-agendadas/{id}/estado",
    tag = "HorasAgendadas",
    params(("id" = String, Path, description = "Appointment ID")),
    request_body = CambioEstado,
    responses(
        (status = 200, description = "Status changed", body = HoraAgendada),
        (status = 400, description = "Missing estado"),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn change_estado(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(cambio): JsonBody<CambioEstado>,
) -> AppResult<Json<HoraAgendada>> {
    Ok(Json(state.horas.change_estado(&id, cambio.estado).await?))
}

/// Delete an appointment
#[utoipa::path(
    delete,
    path = "/api/horas-agendadas/{id}",
    tag = "HorasAgendadas",
    params(("id" = String, Path, description = "Appointment ID")),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 404, description = "Appointment not found")
    )
)]
pub async fn delete_hora(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.horas.delete_hora(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
