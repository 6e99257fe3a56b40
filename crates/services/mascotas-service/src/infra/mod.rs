//! Infrastructure layer - database schema.

pub mod migrations;

pub use migrations::Migrator;

/// Connection handle bound to this service's migrations.
pub type Database = common::Database<Migrator>;
