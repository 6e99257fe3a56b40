//! Service layer - business logic.

mod hora_agendada_service;

pub use hora_agendada_service::{HoraAgendadaManager, HoraAgendadaService};
