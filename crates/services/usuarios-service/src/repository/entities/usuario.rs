//! Usuario database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Usuario;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nombre: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 hash
    pub password: String,
    pub rol: String,
    pub foto_perfil_uri: Option<String>,
    pub fecha_registro: DateTimeUtc,
    pub fecha_actualizacion: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Usuario {
    fn from(model: Model) -> Self {
        Usuario {
            id: model.id,
            nombre: model.nombre,
            email: model.email,
            password_hash: model.password,
            rol: model.rol,
            foto_perfil_uri: model.foto_perfil_uri,
            fecha_registro: model.fecha_registro,
            fecha_actualizacion: model.fecha_actualizacion,
        }
    }
}
