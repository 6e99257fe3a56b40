//! Common utilities shared across all microservices.
//!
//! This crate provides:
//! - Unified error handling mapped to HTTP responses
//! - Configuration structures read from the environment
//! - Database connection and migration management (feature `database`)
//! - Extractors, CORS and the health route
//! - `migrate` subcommands and tracing setup for the binaries (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
#[cfg(feature = "database")]
pub mod db;
pub mod error;
pub mod extract;
pub mod http;

pub use config::*;
#[cfg(feature = "database")]
pub use db::{Database, MigrateAction};
pub use error::{AppError, AppResult, OptionExt};
pub use extract::{JsonBody, QueryParams};
pub use http::{cors_layer, health_routes, HealthResponse};
