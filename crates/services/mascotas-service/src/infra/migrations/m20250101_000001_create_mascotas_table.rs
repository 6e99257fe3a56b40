//! Migration: Create mascotas table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mascotas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Mascotas::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Mascotas::Nombre).string_len(100).not_null())
                    .col(ColumnDef::new(Mascotas::Edad).integer().not_null())
                    .col(ColumnDef::new(Mascotas::Especie).string_len(50).not_null())
                    .col(ColumnDef::new(Mascotas::FotoIcono).integer().null())
                    .col(ColumnDef::new(Mascotas::FotoUri).text().null())
                    .col(ColumnDef::new(Mascotas::UsuarioId).string_len(36).not_null())
                    .col(
                        ColumnDef::new(Mascotas::FechaRegistro)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Mascotas::FechaActualizacion)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mascotas_usuario_id")
                    .table(Mascotas::Table)
                    .col(Mascotas::UsuarioId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mascotas_especie")
                    .table(Mascotas::Table)
                    .col(Mascotas::Especie)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mascotas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Mascotas {
    Table,
    Id,
    Nombre,
    Edad,
    Especie,
    FotoIcono,
    FotoUri,
    UsuarioId,
    FechaRegistro,
    FechaActualizacion,
}
