//! Mascota database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Mascota;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mascotas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nombre: String,
    pub edad: i32,
    pub especie: String,
    pub foto_icono: Option<i32>,
    pub foto_uri: Option<String>,
    pub usuario_id: String,
    pub fecha_registro: DateTimeUtc,
    pub fecha_actualizacion: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Mascota {
    fn from(model: Model) -> Self {
        Mascota {
            id: model.id,
            nombre: model.nombre,
            edad: model.edad,
            especie: model.especie,
            foto_icono: model.foto_icono,
            foto_uri: model.foto_uri,
            usuario_id: model.usuario_id,
            fecha_registro: model.fecha_registro,
            fecha_actualizacion: model.fecha_actualizacion,
        }
    }
}
