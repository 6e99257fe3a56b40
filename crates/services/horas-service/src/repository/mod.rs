//! Repository layer for data access.

pub mod entities;
mod hora_agendada_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use hora_agendada_repository::MockHoraAgendadaRepository;
pub use hora_agendada_repository::{HoraAgendadaRepository, HoraAgendadaStore};
