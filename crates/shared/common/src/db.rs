//! Database connection and migration management.
//!
//! Generic over the service's `Migrator`, so every service shares one
//! implementation of the `migrate` CLI actions.

use std::marker::PhantomData;

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::{MigrationStatus, MigratorTrait};
use tracing::info;

use crate::config::DatabaseConfig;

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Database wrapper for connection management
pub struct Database<M: MigratorTrait> {
    connection: DatabaseConnection,
    _migrator: PhantomData<M>,
}

impl<M: MigratorTrait> Clone for Database<M> {
    fn clone(&self) -> Self {
        Self {
            connection: self.connection.clone(),
            _migrator: PhantomData,
        }
    }
}

impl<M: MigratorTrait> Database<M> {
    /// Open the pool and apply pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(config).await?;
        db.run_migrations().await?;
        info!("Database connected and migrations applied");
        Ok(db)
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        Ok(Self {
            connection,
            _migrator: PhantomData,
        })
    }

    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        M::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        M::down(&self.connection, Some(1)).await
    }

    /// List every defined migration with its applied flag, read from this
    /// migrator's own tracking table.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        Ok(M::get_migration_with_status(&self.connection)
            .await?
            .into_iter()
            .map(|m| (m.name().to_string(), m.status() == MigrationStatus::Applied))
            .collect())
    }

    /// Roll back every migration of this migrator and re-apply them. Tables
    /// owned by other services on the same database are left alone.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        M::reset(&self.connection).await?;
        M::up(&self.connection, None).await
    }

    /// Execute one `migrate` CLI action.
    pub async fn apply(&self, action: MigrateAction) -> Result<(), DbErr> {
        match action {
            MigrateAction::Up => {
                self.run_migrations().await?;
                info!("Migrations applied successfully");
            }
            MigrateAction::Down => {
                self.rollback_migration().await?;
                info!("Rolled back last migration");
            }
            MigrateAction::Status => {
                for (name, applied) in self.migration_status().await? {
                    let marker = if applied { "[x]" } else { "[ ]" };
                    println!("{} {}", marker, name);
                }
            }
            MigrateAction::Fresh => {
                self.fresh_migrations().await?;
                info!("Database reset and migrations applied");
            }
        }
        Ok(())
    }
}
