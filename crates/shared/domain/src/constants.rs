//! Domain-level constants.
//!
//! Field length and range limits live next to the fields they constrain
//! (see the `Validate` derives on the input types).

// =============================================================================
// Usuarios
// =============================================================================

/// Role assigned when a request does not carry one
pub const ROL_CLIENTE: &str = "Cliente";

/// Administrator role
pub const ROL_ADMIN: &str = "Admin";

// =============================================================================
// Horas agendadas
// =============================================================================

/// Initial status of every appointment
pub const ESTADO_PENDIENTE: &str = "Pendiente";

/// Status conventionally used by the mobile client once a visit took place
pub const ESTADO_COMPLETADA: &str = "Completada";

/// Status conventionally used by the mobile client for cancelled visits
pub const ESTADO_CANCELADA: &str = "Cancelada";

// =============================================================================
// Identifiers
// =============================================================================

/// Generate a new opaque identifier (36-character UUID string).
pub fn nuevo_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn rol_por_defecto() -> String {
    ROL_CLIENTE.to_string()
}

pub(crate) fn estado_por_defecto() -> String {
    ESTADO_PENDIENTE.to_string()
}
