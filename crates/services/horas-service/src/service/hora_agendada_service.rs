//! HoraAgendada service - appointment booking and status tracking.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::{AppError, AppResult, OptionExt};
use domain::{nuevo_id, validar, ActualizarHoraAgendada, HoraAgendada, NuevaHoraAgendada};

use crate::repository::HoraAgendadaRepository;

/// HoraAgendada service trait for dependency injection.
#[async_trait]
pub trait HoraAgendadaService: Send + Sync {
    async fn list_horas(&self) -> AppResult<Vec<HoraAgendada>>;

    async fn get_hora(&self, id: &str) -> AppResult<Option<HoraAgendada>>;

    async fn list_by_usuario(&self, usuario_id: &str) -> AppResult<Vec<HoraAgendada>>;

    async fn list_by_mascota(&self, mascota_id: &str) -> AppResult<Vec<HoraAgendada>>;

    async fn list_by_estado(&self, estado: &str) -> AppResult<Vec<HoraAgendada>>;

    async fn list_by_tipo(&self, tipo: &str) -> AppResult<Vec<HoraAgendada>>;

    async fn list_by_usuario_and_estado(
        &self,
        usuario_id: &str,
        estado: &str,
    ) -> AppResult<Vec<HoraAgendada>>;

    async fn list_by_fecha(&self, desde: i64, hasta: i64) -> AppResult<Vec<HoraAgendada>>;

    async fn count_by_usuario(&self, usuario_id: &str) -> AppResult<u64>;

    async fn count_by_estado(&self, estado: &str) -> AppResult<u64>;

    async fn create_hora(&self, datos: NuevaHoraAgendada) -> AppResult<HoraAgendada>;

    /// Overwrites everything but the owner.
    async fn update_hora(&self, id: &str, cambios: ActualizarHoraAgendada)
        -> AppResult<HoraAgendada>;

    /// Replace only `estado`. Any string is accepted.
    async fn change_estado(&self, id: &str, estado: String) -> AppResult<HoraAgendada>;

    async fn delete_hora(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of HoraAgendadaService using repository.
pub struct HoraAgendadaManager {
    repo: Arc<dyn HoraAgendadaRepository>,
}

impl HoraAgendadaManager {
    pub fn new(repo: Arc<dyn HoraAgendadaRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl HoraAgendadaService for HoraAgendadaManager {
    async fn list_horas(&self) -> AppResult<Vec<HoraAgendada>> {
        info!("Obteniendo todas las horas agendadas");
        self.repo.find_all().await
    }

    async fn get_hora(&self, id: &str) -> AppResult<Option<HoraAgendada>> {
        info!(id, "Buscando hora agendada");
        self.repo.find_by_id(id).await
    }

    async fn list_by_usuario(&self, usuario_id: &str) -> AppResult<Vec<HoraAgendada>> {
        info!(usuario_id, "Obteniendo horas del usuario");
        self.repo.find_by_usuario_id(usuario_id).await
    }

    async fn list_by_mascota(&self, mascota_id: &str) -> AppResult<Vec<HoraAgendada>> {
        info!(mascota_id, "Obteniendo horas de la mascota");
        self.repo.find_by_mascota_id(mascota_id).await
    }

    async fn list_by_estado(&self, estado: &str) -> AppResult<Vec<HoraAgendada>> {
        info!(estado, "Obteniendo horas por estado");
        self.repo.find_by_estado(estado).await
    }

    async fn list_by_tipo(&self, tipo: &str) -> AppResult<Vec<HoraAgendada>> {
        info!(tipo, "Obteniendo horas por tipo");
        self.repo.find_by_tipo(tipo).await
    }

    async fn list_by_usuario_and_estado(
        &self,
        usuario_id: &str,
        estado: &str,
    ) -> AppResult<Vec<HoraAgendada>> {
        info!(usuario_id, estado, "Obteniendo horas del usuario por estado");
        self.repo
            .find_by_usuario_id_and_estado(usuario_id, estado)
            .await
    }

    async fn list_by_fecha(&self, desde: i64, hasta: i64) -> AppResult<Vec<HoraAgendada>> {
        info!(desde, hasta, "Obteniendo horas por rango de fechas");
        self.repo.find_by_fecha_between(desde, hasta).await
    }

    async fn count_by_usuario(&self, usuario_id: &str) -> AppResult<u64> {
        self.repo.count_by_usuario_id(usuario_id).await
    }

    async fn count_by_estado(&self, estado: &str) -> AppResult<u64> {
        self.repo.count_by_estado(estado).await
    }

    async fn create_hora(&self, datos: NuevaHoraAgendada) -> AppResult<HoraAgendada> {
        validar(&datos)?;
        info!(
            tipo = %datos.tipo,
            usuario_id = %datos.usuario_id,
            "Creando hora agendada"
        );

        let id = match datos.id.clone() {
            Some(id) => {
                if self.repo.exists_by_id(&id).await? {
                    return Err(AppError::conflict(format!(
                        "Ya existe una hora agendada con ID: {id}"
                    )));
                }
                id
            }
            None => nuevo_id(),
        };

        self.repo.insert(HoraAgendada::nueva(id, datos)).await
    }

    async fn update_hora(
        &self,
        id: &str,
        cambios: ActualizarHoraAgendada,
    ) -> AppResult<HoraAgendada> {
        validar(&cambios)?;
        info!(id, "Actualizando hora agendada");

        self.repo.update(id, cambios).await?.ok_or_not_found()
    }

    async fn change_estado(&self, id: &str, estado: String) -> AppResult<HoraAgendada> {
        info!(id, estado = %estado, "Cambiando estado de hora agendada");

        self.repo.update_estado(id, estado).await?.ok_or_not_found()
    }

    async fn delete_hora(&self, id: &str) -> AppResult<()> {
        info!(id, "Eliminando hora agendada");

        if !self.repo.delete_by_id(id).await? {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
