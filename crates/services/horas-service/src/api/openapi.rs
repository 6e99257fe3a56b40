//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::CountResponse;
use domain::{ActualizarHoraAgendada, CambioEstado, HoraAgendada, NuevaHoraAgendada};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::list_horas,
        crate::api::handlers::get_hora,
        crate::api::handlers::list_by_usuario,
        crate::api::handlers::count_by_usuario,
        crate::api::handlers::list_by_usuario_and_estado,
        crate::api::handlers::list_by_mascota,
        crate::api::handlers::list_by_estado,
        crate::api::handlers::count_by_estado,
        crate::api::handlers::list_by_tipo,
        crate::api::handlers::list_by_fecha,
        crate::api::handlers::create_hora,
        crate::api::handlers::update_hora,
        crate::api::handlers::change_estado,
        crate::api::handlers::delete_hora,
    ),
    components(
        schemas(
            HoraAgendada,
            NuevaHoraAgendada,
            ActualizarHoraAgendada,
            CambioEstado,
            CountResponse
        )
    ),
    tags(
        (name = "HorasAgendadas", description = "Veterinary appointment booking"),
    )
)]
pub struct ApiDoc;
