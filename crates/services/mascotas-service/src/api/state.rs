//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::MascotaService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub mascotas: Arc<dyn MascotaService>,
}

impl AppState {
    pub fn new(mascotas: Arc<dyn MascotaService>) -> Self {
        Self { mascotas }
    }
}
