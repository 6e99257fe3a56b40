//! Mascota repository backed by SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait,
    ActiveValue::{NotSet, Unchanged},
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Select, Set, SqlErr, TransactionTrait,
};

use super::entities::mascota::{self, ActiveModel, Entity as MascotaEntity};
use common::{AppError, AppResult};
use domain::{ActualizarMascota, Mascota};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Mascota repository trait for dependency injection.
///
/// List queries return an empty `Vec` when nothing matches.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MascotaRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Mascota>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Mascota>>;

    async fn find_by_usuario_id(&self, usuario_id: &str) -> AppResult<Vec<Mascota>>;

    async fn find_by_especie(&self, especie: &str) -> AppResult<Vec<Mascota>>;

    async fn find_by_usuario_id_and_especie(
        &self,
        usuario_id: &str,
        especie: &str,
    ) -> AppResult<Vec<Mascota>>;

    /// Inclusive on both ends; empty when `min > max`
    async fn find_by_edad_between(&self, min: i32, max: i32) -> AppResult<Vec<Mascota>>;

    /// Case-insensitive substring match on `nombre`. On SQLite only ASCII
    /// letters fold, so `"ÑAND"` finds `"Ñandú"` but `"ñand"` does not.
    async fn find_by_nombre_containing(&self, nombre: &str) -> AppResult<Vec<Mascota>>;

    async fn count_by_usuario_id(&self, usuario_id: &str) -> AppResult<u64>;

    async fn exists_by_id_and_usuario_id(&self, id: &str, usuario_id: &str) -> AppResult<bool>;

    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;

    /// Insert a new row, stamping both timestamps.
    async fn insert(&self, mascota: Mascota) -> AppResult<Mascota>;

    /// Read, merge and save in one transaction. `None` when the row is absent.
    async fn update(&self, id: &str, cambios: ActualizarMascota) -> AppResult<Option<Mascota>>;

    /// Check and delete in one transaction. `false` when the row is absent.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of MascotaRepository
pub struct MascotaStore {
    db: DatabaseConnection,
}

impl MascotaStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn list(&self, query: Select<MascotaEntity>) -> AppResult<Vec<Mascota>> {
        let models = query
            .order_by_asc(mascota::Column::FechaRegistro)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Mascota::from).collect())
    }
}

/// `%fragment%` with `%`, `_` and `\` escaped by `\`, folded the way the
/// backend's `LOWER` folds the column: SQLite only lowercases ASCII letters.
fn contains_pattern(fragment: &str, backend: DbBackend) -> String {
    let folded = match backend {
        DbBackend::Sqlite => fragment.to_ascii_lowercase(),
        _ => fragment.to_lowercase(),
    };

    let mut pattern = String::with_capacity(folded.len() + 2);
    pattern.push('%');
    for c in folded.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl MascotaRepository for MascotaStore {
    async fn find_all(&self) -> AppResult<Vec<Mascota>> {
        self.list(MascotaEntity::find()).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Mascota>> {
        let result = MascotaEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(Mascota::from))
    }

    async fn find_by_usuario_id(&self, usuario_id: &str) -> AppResult<Vec<Mascota>> {
        self.list(MascotaEntity::find().filter(mascota::Column::UsuarioId.eq(usuario_id)))
            .await
    }

    async fn find_by_especie(&self, especie: &str) -> AppResult<Vec<Mascota>> {
        self.list(MascotaEntity::find().filter(mascota::Column::Especie.eq(especie)))
            .await
    }

    async fn find_by_usuario_id_and_especie(
        &self,
        usuario_id: &str,
        especie: &str,
    ) -> AppResult<Vec<Mascota>> {
        self.list(
            MascotaEntity::find()
                .filter(mascota::Column::UsuarioId.eq(usuario_id))
                .filter(mascota::Column::Especie.eq(especie)),
        )
        .await
    }

    async fn find_by_edad_between(&self, min: i32, max: i32) -> AppResult<Vec<Mascota>> {
        self.list(MascotaEntity::find().filter(mascota::Column::Edad.between(min, max)))
            .await
    }

    async fn find_by_nombre_containing(&self, nombre: &str) -> AppResult<Vec<Mascota>> {
        let lower_nombre = Expr::expr(Func::lower(Expr::col((
            mascota::Entity,
            mascota::Column::Nombre,
        ))));
        let backend = self.db.get_database_backend();
        let pattern = LikeExpr::new(contains_pattern(nombre, backend)).escape('\\');

        self.list(MascotaEntity::find().filter(lower_nombre.like(pattern))).await
    }

    async fn count_by_usuario_id(&self, usuario_id: &str) -> AppResult<u64> {
        let count = MascotaEntity::find()
            .filter(mascota::Column::UsuarioId.eq(usuario_id))
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn exists_by_id_and_usuario_id(&self, id: &str, usuario_id: &str) -> AppResult<bool> {
        let count = MascotaEntity::find_by_id(id)
            .filter(mascota::Column::UsuarioId.eq(usuario_id))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let count = MascotaEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn insert(&self, mascota: Mascota) -> AppResult<Mascota> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(mascota.id),
            nombre: Set(mascota.nombre),
            edad: Set(mascota.edad),
            especie: Set(mascota.especie),
            foto_icono: Set(mascota.foto_icono),
            foto_uri: Set(mascota.foto_uri),
            usuario_id: Set(mascota.usuario_id),
            fecha_registro: Set(now),
            fecha_actualizacion: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::conflict("Ya existe una mascota con ese ID")
            }
            _ => AppError::from(err),
        })?;
        Ok(Mascota::from(model))
    }

    async fn update(&self, id: &str, cambios: ActualizarMascota) -> AppResult<Option<Mascota>> {
        let txn = self.db.begin().await?;

        let Some(model) = MascotaEntity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };
        let mut mascota = Mascota::from(model);
        mascota.aplicar(cambios);

        // usuario_id and fecha_registro are never rewritten
        let active_model = ActiveModel {
            id: Unchanged(mascota.id),
            nombre: Set(mascota.nombre),
            edad: Set(mascota.edad),
            especie: Set(mascota.especie),
            foto_icono: Set(mascota.foto_icono),
            foto_uri: Set(mascota.foto_uri),
            usuario_id: NotSet,
            fecha_registro: NotSet,
            fecha_actualizacion: Set(Utc::now()),
        };

        let model = active_model.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(Mascota::from(model)))
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        if MascotaEntity::find_by_id(id).count(&txn).await? == 0 {
            txn.rollback().await?;
            return Ok(false);
        }
        MascotaEntity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(true)
    }
}
