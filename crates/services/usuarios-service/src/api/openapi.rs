//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::api::handlers::ExisteResponse;
use domain::{ActualizarUsuario, Credenciales, NuevoUsuario, Usuario};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::list_usuarios,
        crate::api::handlers::get_usuario,
        crate::api::handlers::get_by_email,
        crate::api::handlers::email_existe,
        crate::api::handlers::registrar,
        crate::api::handlers::login,
        crate::api::handlers::update_usuario,
        crate::api::handlers::delete_usuario,
    ),
    components(
        schemas(Usuario, NuevoUsuario, ActualizarUsuario, Credenciales, ExisteResponse)
    ),
    tags(
        (name = "Usuarios", description = "User registration, login and profiles"),
    )
)]
pub struct ApiDoc;
