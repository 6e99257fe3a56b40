//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::UsuarioService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub usuarios: Arc<dyn UsuarioService>,
}

impl AppState {
    pub fn new(usuarios: Arc<dyn UsuarioService>) -> Self {
        Self { usuarios }
    }
}
