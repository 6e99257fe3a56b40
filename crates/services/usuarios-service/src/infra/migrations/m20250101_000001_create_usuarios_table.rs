//! Migration: Create usuarios table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Usuarios::Nombre).string_len(100).not_null())
                    .col(ColumnDef::new(Usuarios::Email).string_len(100).not_null())
                    .col(ColumnDef::new(Usuarios::Password).string().not_null())
                    .col(ColumnDef::new(Usuarios::Rol).string_len(50).not_null())
                    .col(ColumnDef::new(Usuarios::FotoPerfilUri).text().null())
                    .col(
                        ColumnDef::new(Usuarios::FechaRegistro)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Usuarios::FechaActualizacion)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Email lookups and uniqueness
        manager
            .create_index(
                Index::create()
                    .name("idx_usuarios_email")
                    .table(Usuarios::Table)
                    .col(Usuarios::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Usuarios {
    Table,
    Id,
    Nombre,
    Email,
    Password,
    Rol,
    FotoPerfilUri,
    FechaRegistro,
    FechaActualizacion,
}
