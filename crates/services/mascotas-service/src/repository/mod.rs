//! Repository layer for data access.

pub mod entities;
mod mascota_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use mascota_repository::MockMascotaRepository;
pub use mascota_repository::{MascotaRepository, MascotaStore};
