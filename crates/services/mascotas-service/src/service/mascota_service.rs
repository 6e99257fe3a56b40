//! Mascota service - pet records owned by users.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::{AppError, AppResult, OptionExt};
use domain::{nuevo_id, validar, ActualizarMascota, Mascota, NuevaMascota};

use crate::repository::MascotaRepository;

/// Mascota service trait for dependency injection.
#[async_trait]
pub trait MascotaService: Send + Sync {
    async fn list_mascotas(&self) -> AppResult<Vec<Mascota>>;

    async fn get_mascota(&self, id: &str) -> AppResult<Option<Mascota>>;

    async fn list_by_usuario(&self, usuario_id: &str) -> AppResult<Vec<Mascota>>;

    async fn list_by_especie(&self, especie: &str) -> AppResult<Vec<Mascota>>;

    async fn list_by_usuario_and_especie(
        &self,
        usuario_id: &str,
        especie: &str,
    ) -> AppResult<Vec<Mascota>>;

    async fn list_by_edad(&self, min: i32, max: i32) -> AppResult<Vec<Mascota>>;

    async fn search_by_nombre(&self, nombre: &str) -> AppResult<Vec<Mascota>>;

    async fn belongs_to_usuario(&self, id: &str, usuario_id: &str) -> AppResult<bool>;

    async fn count_by_usuario(&self, usuario_id: &str) -> AppResult<u64>;

    async fn create_mascota(&self, datos: NuevaMascota) -> AppResult<Mascota>;

    /// Overwrites everything but the owner.
    async fn update_mascota(&self, id: &str, cambios: ActualizarMascota) -> AppResult<Mascota>;

    async fn delete_mascota(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of MascotaService using repository.
pub struct MascotaManager {
    repo: Arc<dyn MascotaRepository>,
}

impl MascotaManager {
    pub fn new(repo: Arc<dyn MascotaRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl MascotaService for MascotaManager {
    async fn list_mascotas(&self) -> AppResult<Vec<Mascota>> {
        info!("Obteniendo todas las mascotas");
        self.repo.find_all().await
    }

    async fn get_mascota(&self, id: &str) -> AppResult<Option<Mascota>> {
        info!(id, "Buscando mascota");
        self.repo.find_by_id(id).await
    }

    async fn list_by_usuario(&self, usuario_id: &str) -> AppResult<Vec<Mascota>> {
        info!(usuario_id, "Obteniendo mascotas del usuario");
        self.repo.find_by_usuario_id(usuario_id).await
    }

    async fn list_by_especie(&self, especie: &str) -> AppResult<Vec<Mascota>> {
        info!(especie, "Obteniendo mascotas por especie");
        self.repo.find_by_especie(especie).await
    }

    async fn list_by_usuario_and_especie(
        &self,
        usuario_id: &str,
        especie: &str,
    ) -> AppResult<Vec<Mascota>> {
        info!(usuario_id, especie, "Obteniendo mascotas del usuario por especie");
        self.repo
            .find_by_usuario_id_and_especie(usuario_id, especie)
            .await
    }

    async fn list_by_edad(&self, min: i32, max: i32) -> AppResult<Vec<Mascota>> {
        info!(min, max, "Obteniendo mascotas por rango de edad");
        self.repo.find_by_edad_between(min, max).await
    }

    async fn search_by_nombre(&self, nombre: &str) -> AppResult<Vec<Mascota>> {
        info!(nombre, "Buscando mascotas por nombre");
        self.repo.find_by_nombre_containing(nombre).await
    }

    async fn belongs_to_usuario(&self, id: &str, usuario_id: &str) -> AppResult<bool> {
        self.repo.exists_by_id_and_usuario_id(id, usuario_id).await
    }

    async fn count_by_usuario(&self, usuario_id: &str) -> AppResult<u64> {
        info!(usuario_id, "Contando mascotas del usuario");
        self.repo.count_by_usuario_id(usuario_id).await
    }

    async fn create_mascota(&self, datos: NuevaMascota) -> AppResult<Mascota> {
        validar(&datos)?;
        info!(nombre = %datos.nombre, usuario_id = %datos.usuario_id, "Guardando mascota");

        let id = match datos.id.clone() {
            Some(id) => {
                if self.repo.exists_by_id(&id).await? {
                    return Err(AppError::conflict(format!("Ya existe una mascota con ID: {id}")));
                }
                id
            }
            None => nuevo_id(),
        };

        self.repo.insert(Mascota::nueva(id, datos)).await
    }

    async fn update_mascota(&self, id: &str, cambios: ActualizarMascota) -> AppResult<Mascota> {
        validar(&cambios)?;
        info!(id, "Actualizando mascota");

        self.repo.update(id, cambios).await?.ok_or_not_found()
    }

    async fn delete_mascota(&self, id: &str) -> AppResult<()> {
        info!(id, "Eliminando mascota");

        if !self.repo.delete_by_id(id).await? {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockMascotaRepository;

    fn nueva_mascota() -> NuevaMascota {
        NuevaMascota {
            id: None,
            nombre: "Firulais".to_string(),
            edad: 3,
            especie: "Perro".to_string(),
            foto_icono: Some(1),
            foto_uri: None,
            usuario_id: "user123".to_string(),
        }
    }

    fn actualizacion(edad: i32) -> ActualizarMascota {
        ActualizarMascota {
            nombre: "Firulais Jr".to_string(),
            edad,
            especie: "Perro".to_string(),
            foto_icono: None,
            foto_uri: Some("content://foto".to_string()),
        }
    }

    fn manager(repo: MockMascotaRepository) -> MascotaManager {
        MascotaManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_generates_id() {
        let mut repo = MockMascotaRepository::new();
        repo.expect_exists_by_id().never();
        repo.expect_insert().times(1).returning(Ok);

        let mascota = manager(repo).create_mascota(nueva_mascota()).await.unwrap();

        assert_eq!(mascota.id.len(), 36);
        assert_eq!(mascota.usuario_id, "user123");
    }

    #[tokio::test]
    async fn test_create_out_of_range_edad_fails_before_storage() {
        let repo = MockMascotaRepository::new();
        let mut datos = nueva_mascota();
        datos.edad = 51;

        let result = manager(repo).create_mascota(datos).await;

        let Err(AppError::InvalidFields(fields)) = result else {
            panic!("expected field errors");
        };
        assert!(fields.contains("edad"));
    }

    #[tokio::test]
    async fn test_create_existing_client_id_is_conflict() {
        let mut repo = MockMascotaRepository::new();
        repo.expect_exists_by_id()
            .withf(|id| id == "pet456")
            .returning(|_| Ok(true));
        repo.expect_insert().never();

        let mut datos = nueva_mascota();
        datos.id = Some("pet456".to_string());

        assert!(matches!(
            manager(repo).create_mascota(datos).await,
            Err(AppError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut repo = MockMascotaRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_update().times(1).returning(|_, _| Ok(None));

        let result = manager(repo).update_mascota("missing", actualizacion(4)).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_delegates_merge_to_repository() {
        let mut repo = MockMascotaRepository::new();
        repo.expect_update()
            .withf(|id, cambios| id == "pet456" && cambios.edad == 4)
            .times(1)
            .returning(|id, cambios| {
                let mut mascota = Mascota::nueva(id.to_string(), nueva_mascota());
                mascota.aplicar(cambios);
                Ok(Some(mascota))
            });

        let mascota = manager(repo)
            .update_mascota("pet456", actualizacion(4))
            .await
            .unwrap();

        assert_eq!(mascota.usuario_id, "user123");
        assert_eq!(mascota.nombre, "Firulais Jr");
        assert_eq!(mascota.foto_icono, None);
    }

    #[tokio::test]
    async fn test_update_invalid_edad_never_reads() {
        let repo = MockMascotaRepository::new();

        let result = manager(repo).update_mascota("pet456", actualizacion(-1)).await;

        assert!(matches!(result, Err(AppError::InvalidFields(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockMascotaRepository::new();
        repo.expect_delete_by_id()
            .withf(|id| id == "missing")
            .times(1)
            .returning(|_| Ok(false));

        assert!(matches!(
            manager(repo).delete_mascota("missing").await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_count_and_ownership() {
        let mut repo = MockMascotaRepository::new();
        repo.expect_count_by_usuario_id()
            .withf(|usuario_id| usuario_id == "user123")
            .returning(|_| Ok(2));
        repo.expect_exists_by_id_and_usuario_id()
            .withf(|id, usuario_id| id == "pet456" && usuario_id == "otro")
            .returning(|_, _| Ok(false));
        let service = manager(repo);

        assert_eq!(service.count_by_usuario("user123").await.unwrap(), 2);
        assert!(!service.belongs_to_usuario("pet456", "otro").await.unwrap());
    }

    #[tokio::test]
    async fn test_filtered_lists_empty() {
        let mut repo = MockMascotaRepository::new();
        repo.expect_find_by_especie().returning(|_| Ok(vec![]));
        repo.expect_find_by_edad_between()
            .withf(|min, max| *min == 10 && *max == 2)
            .returning(|_, _| Ok(vec![]));
        let service = manager(repo);

        assert!(service.list_by_especie("Dragón").await.unwrap().is_empty());
        assert!(service.list_by_edad(10, 2).await.unwrap().is_empty());
    }
}
