//! HoraAgendada database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::HoraAgendada;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "horas_agendadas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub fecha: Option<i64>,
    pub hora: i32,
    pub minuto: i32,
    pub tipo: String,
    pub usuario_id: String,
    pub mascota_id: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub estado: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notas: Option<String>,
    pub fecha_creacion: DateTimeUtc,
    pub fecha_actualizacion: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HoraAgendada {
    fn from(model: Model) -> Self {
        HoraAgendada {
            id: model.id,
            fecha: model.fecha,
            hora: model.hora,
            minuto: model.minuto,
            tipo: model.tipo,
            usuario_id: model.usuario_id,
            mascota_id: model.mascota_id,
            estado: model.estado,
            notas: model.notas,
            fecha_creacion: model.fecha_creacion,
            fecha_actualizacion: model.fecha_actualizacion,
        }
    }
}
