//! Migration: Create horas_agendadas table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEXES: [(&str, HorasAgendadas); 4] = [
    ("idx_horas_agendadas_usuario_id", HorasAgendadas::UsuarioId),
    ("idx_horas_agendadas_mascota_id", HorasAgendadas::MascotaId),
    ("idx_horas_agendadas_estado", HorasAgendadas::Estado),
    ("idx_horas_agendadas_fecha", HorasAgendadas::Fecha),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HorasAgendadas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HorasAgendadas::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    // Epoch milliseconds
                    .col(ColumnDef::new(HorasAgendadas::Fecha).big_integer().null())
                    .col(ColumnDef::new(HorasAgendadas::Hora).integer().not_null())
                    .col(ColumnDef::new(HorasAgendadas::Minuto).integer().not_null())
                    .col(ColumnDef::new(HorasAgendadas::Tipo).string_len(100).not_null())
                    .col(
                        ColumnDef::new(HorasAgendadas::UsuarioId)
                            .string_len(36)
                            .not_null(),
                    )
                    .col(ColumnDef::new(HorasAgendadas::MascotaId).string_len(36).null())
                    .col(ColumnDef::new(HorasAgendadas::Estado).text().not_null())
                    .col(ColumnDef::new(HorasAgendadas::Notas).text().null())
                    .col(
                        ColumnDef::new(HorasAgendadas::FechaCreacion)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HorasAgendadas::FechaActualizacion)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(HorasAgendadas::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HorasAgendadas::Table).to_owned())
            .await
    }
}

#[derive(Iden, Clone, Copy)]
enum HorasAgendadas {
    Table,
    Id,
    Fecha,
    Hora,
    Minuto,
    Tipo,
    UsuarioId,
    MascotaId,
    Estado,
    Notas,
    FechaCreacion,
    FechaActualizacion,
}
