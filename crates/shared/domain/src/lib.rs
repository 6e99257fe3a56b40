//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The three AppVet services (usuarios, mascotas, horas agendadas) share
//! their entity definitions and field rules from here.

pub mod constants;
pub mod error;
pub mod hora_agendada;
pub mod mascota;
pub mod password;
pub mod usuario;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult, FieldErrors};
pub use hora_agendada::{ActualizarHoraAgendada, CambioEstado, HoraAgendada, NuevaHoraAgendada};
pub use mascota::{ActualizarMascota, Mascota, NuevaMascota};
pub use password::Password;
pub use usuario::{ActualizarUsuario, Credenciales, NuevoUsuario, Usuario};
pub use validation::validar;
