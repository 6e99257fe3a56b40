//! Service layer - business logic.

mod mascota_service;

pub use mascota_service::{MascotaManager, MascotaService};
