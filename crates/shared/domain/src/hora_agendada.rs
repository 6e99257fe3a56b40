//! HoraAgendada (scheduled appointment) domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::estado_por_defecto;
use crate::validation::no_vacio;

/// A veterinary appointment booked by a user, optionally for one pet.
///
/// `estado` is free text: `"Pendiente"` is the initial value and any other
/// string may replace it, there is no transition graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HoraAgendada {
    pub id: String,
    /// Appointment day as epoch milliseconds
    pub fecha: Option<i64>,
    pub hora: i32,
    pub minuto: i32,
    pub tipo: String,
    /// Owner id (soft reference to the Usuarios service)
    pub usuario_id: String,
    /// Pet id (soft reference to the Mascotas service)
    pub mascota_id: Option<String>,
    pub estado: String,
    pub notas: Option<String>,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,
}

impl HoraAgendada {
    /// Build a not-yet-persisted appointment with provisional timestamps.
    pub fn nueva(id: String, datos: NuevaHoraAgendada) -> Self {
        let now = Utc::now();
        Self {
            id,
            fecha: datos.fecha,
            hora: datos.hora,
            minuto: datos.minuto,
            tipo: datos.tipo,
            usuario_id: datos.usuario_id,
            mascota_id: datos.mascota_id,
            estado: datos.estado,
            notas: datos.notas,
            fecha_creacion: now,
            fecha_actualizacion: now,
        }
    }

    /// Merge a full update. The owner never changes.
    pub fn aplicar(&mut self, cambios: ActualizarHoraAgendada) {
        self.fecha = cambios.fecha;
        self.hora = cambios.hora;
        self.minuto = cambios.minuto;
        self.tipo = cambios.tipo;
        self.estado = cambios.estado;
        self.mascota_id = cambios.mascota_id;
        self.notas = cambios.notas;
    }

    pub fn cambiar_estado(&mut self, estado: String) {
        self.estado = estado;
    }
}

/// Creation payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NuevaHoraAgendada {
    #[validate(
        custom(function = "no_vacio"),
        length(max = 36, message = "El ID no puede exceder 36 caracteres")
    )]
    pub id: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = 1735689600000_i64))]
    pub fecha: Option<i64>,
    #[validate(range(min = 0, max = 23, message = "La hora debe estar entre 0 y 23"))]
    #[cfg_attr(feature = "openapi", schema(example = 14))]
    pub hora: i32,
    #[validate(range(min = 0, max = 59, message = "El minuto debe estar entre 0 y 59"))]
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub minuto: i32,
    #[serde(default)]
    #[validate(
        custom(function = "no_vacio"),
        length(max = 100, message = "El tipo no puede exceder 100 caracteres")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "Consulta General"))]
    pub tipo: String,
    #[serde(default)]
    #[validate(
        custom(function = "no_vacio"),
        length(max = 36, message = "El ID de usuario no puede exceder 36 caracteres")
    )]
    pub usuario_id: String,
    #[validate(length(max = 36, message = "El ID de mascota no puede exceder 36 caracteres"))]
    pub mascota_id: Option<String>,
    #[serde(default = "estado_por_defecto")]
    #[cfg_attr(feature = "openapi", schema(example = "Pendiente"))]
    pub estado: String,
    pub notas: Option<String>,
}

/// Full update payload. Carries no owner: the stored one is kept.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActualizarHoraAgendada {
    pub fecha: Option<i64>,
    #[validate(range(min = 0, max = 23, message = "La hora debe estar entre 0 y 23"))]
    pub hora: i32,
    #[validate(range(min = 0, max = 59, message = "El minuto debe estar entre 0 y 59"))]
    pub minuto: i32,
    #[serde(default)]
    #[validate(
        custom(function = "no_vacio"),
        length(max = 100, message = "El tipo no puede exceder 100 caracteres")
    )]
    pub tipo: String,
    #[validate(length(max = 36, message = "El ID de mascota no puede exceder 36 caracteres"))]
    pub mascota_id: Option<String>,
    #[serde(default = "estado_por_defecto")]
    pub estado: String,
    pub notas: Option<String>,
}

/// Status-only update payload.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CambioEstado {
    #[cfg_attr(feature = "openapi", schema(example = "Completada"))]
    pub estado: String,
}
