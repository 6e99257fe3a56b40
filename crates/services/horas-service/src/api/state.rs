//! Application state for dependency injection.

use std::sync::Arc;

use crate::service::HoraAgendadaService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub horas: Arc<dyn HoraAgendadaService>,
}

impl AppState {
    pub fn new(horas: Arc<dyn HoraAgendadaService>) -> Self {
        Self { horas }
    }
}
