//! Mascota domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::no_vacio;

/// A pet owned by a user of the mobile app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Mascota {
    pub id: String,
    pub nombre: String,
    /// Age in years, 0..=50
    pub edad: i32,
    pub especie: String,
    /// Index of a bundled icon in the mobile client
    pub foto_icono: Option<i32>,
    pub foto_uri: Option<String>,
    /// Owner id (soft reference to the Usuarios service)
    pub usuario_id: String,
    pub fecha_registro: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,
}

impl Mascota {
    /// Build a not-yet-persisted pet with provisional timestamps.
    pub fn nueva(id: String, datos: NuevaMascota) -> Self {
        let now = Utc::now();
        Self {
            id,
            nombre: datos.nombre,
            edad: datos.edad,
            especie: datos.especie,
            foto_icono: datos.foto_icono,
            foto_uri: datos.foto_uri,
            usuario_id: datos.usuario_id,
            fecha_registro: now,
            fecha_actualizacion: now,
        }
    }

    /// Merge an update. The owner never changes.
    pub fn aplicar(&mut self, cambios: ActualizarMascota) {
        self.nombre = cambios.nombre;
        self.edad = cambios.edad;
        self.especie = cambios.especie;
        self.foto_uri = cambios.foto_uri;
        self.foto_icono = cambios.foto_icono;
    }
}

/// Creation payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NuevaMascota {
    #[validate(
        custom(function = "no_vacio"),
        length(max = 36, message = "El ID no puede exceder 36 caracteres")
    )]
    pub id: Option<String>,
    #[serde(default)]
    #[validate(
        custom(function = "no_vacio"),
        length(max = 100, message = "El nombre no puede exceder 100 caracteres")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "Firulais"))]
    pub nombre: String,
    #[validate(range(min = 0, max = 50, message = "La edad debe estar entre 0 y 50 años"))]
    #[cfg_attr(feature = "openapi", schema(example = 3))]
    pub edad: i32,
    #[serde(default)]
    #[validate(
        custom(function = "no_vacio"),
        length(max = 50, message = "La especie no puede exceder 50 caracteres")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "Perro"))]
    pub especie: String,
    pub foto_icono: Option<i32>,
    pub foto_uri: Option<String>,
    #[serde(default)]
    #[validate(
        custom(function = "no_vacio"),
        length(max = 36, message = "El ID de usuario no puede exceder 36 caracteres")
    )]
    pub usuario_id: String,
}

/// Update payload. Carries no owner: the stored one is kept.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActualizarMascota {
    #[serde(default)]
    #[validate(
        custom(function = "no_vacio"),
        length(max = 100, message = "El nombre no puede exceder 100 caracteres")
    )]
    pub nombre: String,
    #[validate(range(min = 0, max = 50, message = "La edad debe estar entre 0 y 50 años"))]
    pub edad: i32,
    #[serde(default)]
    #[validate(
        custom(function = "no_vacio"),
        length(max = 50, message = "La especie no puede exceder 50 caracteres")
    )]
    pub especie: String,
    pub foto_icono: Option<i32>,
    pub foto_uri: Option<String>,
}
