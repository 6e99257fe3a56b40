//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::{CountResponse, PerteneceResponse};
use domain::{ActualizarMascota, Mascota, NuevaMascota};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::list_mascotas,
        crate::api::handlers::get_mascota,
        crate::api::handlers::list_by_usuario,
        crate::api::handlers::count_by_usuario,
        crate::api::handlers::list_by_usuario_and_especie,
        crate::api::handlers::list_by_especie,
        crate::api::handlers::list_by_edad,
        crate::api::handlers::search_by_nombre,
        crate::api::handlers::pertenece_a_usuario,
        crate::api::handlers::create_mascota,
        crate::api::handlers::update_mascota,
        crate::api::handlers::delete_mascota,
    ),
    components(
        schemas(Mascota, NuevaMascota, ActualizarMascota, CountResponse, PerteneceResponse)
    ),
    tags(
        (name = "Mascotas", description = "Pets and their owners"),
    )
)]
pub struct ApiDoc;
