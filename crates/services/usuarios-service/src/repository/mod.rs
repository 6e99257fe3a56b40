//! Repository layer for data access.

pub mod entities;
mod usuario_repository;

#[cfg(any(test, feature = "test-utils"))]
pub use usuario_repository::MockUsuarioRepository;
pub use usuario_repository::{UsuarioRepository, UsuarioStore};
