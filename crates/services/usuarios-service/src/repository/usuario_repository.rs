//! Usuario repository backed by SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Unchanged},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, SqlErr, TransactionTrait,
};

use super::entities::usuario::{self, ActiveModel, Entity as UsuarioEntity};
use common::{AppError, AppResult};
use domain::{ActualizarUsuario, Password, Usuario};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Usuario repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Usuario>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Usuario>>;

    /// Exact, case-sensitive match
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Usuario>>;

    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;

    /// Insert a new row, stamping both timestamps.
    async fn insert(&self, usuario: Usuario) -> AppResult<Usuario>;

    /// Read, merge and save in one transaction. `None` when the row is absent.
    /// `password` replaces the stored hash only when present.
    async fn update(
        &self,
        id: &str,
        cambios: ActualizarUsuario,
        password: Option<Password>,
    ) -> AppResult<Option<Usuario>>;

    /// Check and delete in one transaction. `false` when the row is absent.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of UsuarioRepository
pub struct UsuarioStore {
    db: DatabaseConnection,
}

impl UsuarioStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::conflict("Ya existe un usuario con ese email o ID")
        }
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UsuarioRepository for UsuarioStore {
    async fn find_all(&self) -> AppResult<Vec<Usuario>> {
        let models = UsuarioEntity::find()
            .order_by_asc(usuario::Column::FechaRegistro)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Usuario::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Usuario>> {
        let result = UsuarioEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Usuario::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Usuario>> {
        let result = UsuarioEntity::find()
            .filter(usuario::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(result.map(Usuario::from))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = UsuarioEntity::find()
            .filter(usuario::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let count = UsuarioEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn insert(&self, usuario: Usuario) -> AppResult<Usuario> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(usuario.id),
            nombre: Set(usuario.nombre),
            email: Set(usuario.email),
            password: Set(usuario.password_hash),
            rol: Set(usuario.rol),
            foto_perfil_uri: Set(usuario.foto_perfil_uri),
            fecha_registro: Set(now),
            fecha_actualizacion: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(insert_error)?;
        Ok(Usuario::from(model))
    }

    async fn update(
        &self,
        id: &str,
        cambios: ActualizarUsuario,
        password: Option<Password>,
    ) -> AppResult<Option<Usuario>> {
        let txn = self.db.begin().await?;

        let Some(model) = UsuarioEntity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };
        let mut usuario = Usuario::from(model);
        usuario.aplicar(cambios, password);

        // email and fecha_registro are never rewritten
        let active_model = ActiveModel {
            id: Unchanged(usuario.id),
            nombre: Set(usuario.nombre),
            email: NotSet,
            password: Set(usuario.password_hash),
            rol: Set(usuario.rol),
            foto_perfil_uri: Set(usuario.foto_perfil_uri),
            fecha_registro: NotSet,
            fecha_actualizacion: Set(Utc::now()),
        };

        let model = active_model.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(Usuario::from(model)))
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        if UsuarioEntity::find_by_id(id).count(&txn).await? == 0 {
            txn.rollback().await?;
            return Ok(false);
        }
        UsuarioEntity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(true)
    }
}
