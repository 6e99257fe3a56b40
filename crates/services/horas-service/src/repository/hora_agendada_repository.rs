//! HoraAgendada repository backed by SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr,
    ActiveModelTrait,
    ActiveValue::{NotSet, Unchanged},
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    Set, SqlErr, TransactionTrait,
};

use super::entities::hora_agendada::{ActiveModel, Column, Entity as HoraAgendadaEntity};
use common::{AppError, AppResult};
use domain::{ActualizarHoraAgendada, HoraAgendada};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// HoraAgendada repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HoraAgendadaRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<HoraAgendada>>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<HoraAgendada>>;

    async fn find_by_usuario_id(&self, usuario_id: &str) -> AppResult<Vec<HoraAgendada>>;

    async fn find_by_mascota_id(&self, mascota_id: &str) -> AppResult<Vec<HoraAgendada>>;

    async fn find_by_estado(&self, estado: &str) -> AppResult<Vec<HoraAgendada>>;

    async fn find_by_tipo(&self, tipo: &str) -> AppResult<Vec<HoraAgendada>>;

    async fn find_by_usuario_id_and_estado(
        &self,
        usuario_id: &str,
        estado: &str,
    ) -> AppResult<Vec<HoraAgendada>>;

    /// `desde <= fecha <= hasta`; rows without a fecha never match
    async fn find_by_fecha_between(&self, desde: i64, hasta: i64) -> AppResult<Vec<HoraAgendada>>;

    async fn count_by_usuario_id(&self, usuario_id: &str) -> AppResult<u64>;

    async fn count_by_estado(&self, estado: &str) -> AppResult<u64>;

    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;

    /// Insert a new row, stamping both timestamps.
    async fn insert(&self, hora: HoraAgendada) -> AppResult<HoraAgendada>;

    /// Read, merge and save in one transaction. `None` when the row is absent.
    async fn update(
        &self,
        id: &str,
        cambios: ActualizarHoraAgendada,
    ) -> AppResult<Option<HoraAgendada>>;

    /// Single `UPDATE` of `estado` and the last-modified stamp; every other
    /// column keeps whatever value it holds at that moment.
    async fn update_estado(&self, id: &str, estado: String) -> AppResult<Option<HoraAgendada>>;

    /// Check and delete in one transaction. `false` when the row is absent.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;
}

/// Concrete implementation of HoraAgendadaRepository
pub struct HoraAgendadaStore {
    db: DatabaseConnection,
}

impl HoraAgendadaStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn list(&self, query: Select<HoraAgendadaEntity>) -> AppResult<Vec<HoraAgendada>> {
        let models = query
            .order_by_asc(Column::Fecha)
            .order_by_asc(Column::Hora)
            .order_by_asc(Column::Minuto)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(HoraAgendada::from).collect())
    }

    async fn count(&self, query: Select<HoraAgendadaEntity>) -> AppResult<u64> {
        Ok(query.count(&self.db).await?)
    }
}

#[async_trait]
impl HoraAgendadaRepository for HoraAgendadaStore {
    async fn find_all(&self) -> AppResult<Vec<HoraAgendada>> {
        self.list(HoraAgendadaEntity::find()).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<HoraAgendada>> {
        let result = HoraAgendadaEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(HoraAgendada::from))
    }

    async fn find_by_usuario_id(&self, usuario_id: &str) -> AppResult<Vec<HoraAgendada>> {
        self.list(HoraAgendadaEntity::find().filter(Column::UsuarioId.eq(usuario_id)))
            .await
    }

    async fn find_by_mascota_id(&self, mascota_id: &str) -> AppResult<Vec<HoraAgendada>> {
        self.list(HoraAgendadaEntity::find().filter(Column::MascotaId.eq(mascota_id)))
            .await
    }

    async fn find_by_estado(&self, estado: &str) -> AppResult<Vec<HoraAgendada>> {
        self.list(HoraAgendadaEntity::find().filter(Column::Estado.eq(estado)))
            .await
    }

    async fn find_by_tipo(&self, tipo: &str) -> AppResult<Vec<HoraAgendada>> {
        self.list(HoraAgendadaEntity::find().filter(Column::Tipo.eq(tipo)))
            .await
    }

    async fn find_by_usuario_id_and_estado(
        &self,
        usuario_id: &str,
        estado: &str,
    ) -> AppResult<Vec<HoraAgendada>> {
        self.list(
            HoraAgendadaEntity::find()
                .filter(Column::UsuarioId.eq(usuario_id))
                .filter(Column::Estado.eq(estado)),
        )
        .await
    }

    async fn find_by_fecha_between(&self, desde: i64, hasta: i64) -> AppResult<Vec<HoraAgendada>> {
        self.list(
            HoraAgendadaEntity::find()
                .filter(Column::Fecha.gte(desde))
                .filter(Column::Fecha.lte(hasta)),
        )
        .await
    }

    async fn count_by_usuario_id(&self, usuario_id: &str) -> AppResult<u64> {
        self.count(HoraAgendadaEntity::find().filter(Column::UsuarioId.eq(usuario_id)))
            .await
    }

    async fn count_by_estado(&self, estado: &str) -> AppResult<u64> {
        self.count(HoraAgendadaEntity::find().filter(Column::Estado.eq(estado)))
            .await
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        Ok(self.count(HoraAgendadaEntity::find_by_id(id)).await? > 0)
    }

    async fn insert(&self, hora: HoraAgendada) -> AppResult<HoraAgendada> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(hora.id),
            fecha: Set(hora.fecha),
            hora: Set(hora.hora),
            minuto: Set(hora.minuto),
            tipo: Set(hora.tipo),
            usuario_id: Set(hora.usuario_id),
            mascota_id: Set(hora.mascota_id),
            estado: Set(hora.estado),
            notas: Set(hora.notas),
            fecha_creacion: Set(now),
            fecha_actualizacion: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(|err| match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::conflict("Ya existe una hora agendada con ese ID")
            }
            _ => AppError::from(err),
        })?;
        Ok(HoraAgendada::from(model))
    }

    async fn update(
        &self,
        id: &str,
        cambios: ActualizarHoraAgendada,
    ) -> AppResult<Option<HoraAgendada>> {
        let txn = self.db.begin().await?;

        let Some(model) = HoraAgendadaEntity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(None);
        };
        let mut hora = HoraAgendada::from(model);
        hora.aplicar(cambios);

        // usuario_id and fecha_creacion are never rewritten
        let active_model = ActiveModel {
            id: Unchanged(hora.id),
            fecha: Set(hora.fecha),
            hora: Set(hora.hora),
            minuto: Set(hora.minuto),
            tipo: Set(hora.tipo),
            usuario_id: NotSet,
            mascota_id: Set(hora.mascota_id),
            estado: Set(hora.estado),
            notas: Set(hora.notas),
            fecha_creacion: NotSet,
            fecha_actualizacion: Set(Utc::now()),
        };

        let model = active_model.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(HoraAgendada::from(model)))
    }

    async fn update_estado(&self, id: &str, estado: String) -> AppResult<Option<HoraAgendada>> {
        let txn = self.db.begin().await?;

        let result = HoraAgendadaEntity::update_many()
            .col_expr(Column::Estado, Expr::value(estado))
            .col_expr(Column::FechaActualizacion, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let model = HoraAgendadaEntity::find_by_id(id).one(&txn).await?;
        txn.commit().await?;

        Ok(model.map(HoraAgendada::from))
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        if HoraAgendadaEntity::find_by_id(id).count(&txn).await? == 0 {
            txn.rollback().await?;
            return Ok(false);
        }
        HoraAgendadaEntity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(true)
    }
}
