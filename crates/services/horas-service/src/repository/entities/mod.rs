//! SeaORM entities.

pub mod hora_agendada;
