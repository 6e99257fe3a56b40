//! Database migrations.

use sea_orm_migration::prelude::*;

mod m20250101_000001_create_mascotas_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// Services may share one database, so each tracks its own migrations.
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_mascotas").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_mascotas_table::Migration)]
    }
}
