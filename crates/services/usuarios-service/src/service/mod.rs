//! Service layer - business logic.

mod usuario_service;

pub use usuario_service::{UsuarioManager, UsuarioService};
