//! Usuario service - registration, login and profile maintenance.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use common::{AppError, AppResult, OptionExt};
use domain::{nuevo_id, validar, ActualizarUsuario, NuevoUsuario, Password, Usuario};

use crate::repository::UsuarioRepository;

/// Usuario service trait for dependency injection.
#[async_trait]
pub trait UsuarioService: Send + Sync {
    async fn list_usuarios(&self) -> AppResult<Vec<Usuario>>;

    async fn get_usuario(&self, id: &str) -> AppResult<Option<Usuario>>;

    async fn get_by_email(&self, email: &str) -> AppResult<Option<Usuario>>;

    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    /// Validate, reject duplicate email or id, hash the password and persist.
    async fn register(&self, datos: NuevoUsuario) -> AppResult<Usuario>;

    /// `Some` only when the email exists and the password matches its hash.
    async fn login(&self, email: &str, password: &str) -> AppResult<Option<Usuario>>;

    async fn update_usuario(&self, id: &str, cambios: ActualizarUsuario) -> AppResult<Usuario>;

    async fn delete_usuario(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UsuarioService using repository.
pub struct UsuarioManager {
    repo: Arc<dyn UsuarioRepository>,
}

impl UsuarioManager {
    pub fn new(repo: Arc<dyn UsuarioRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UsuarioService for UsuarioManager {
    async fn list_usuarios(&self) -> AppResult<Vec<Usuario>> {
        info!("Obteniendo todos los usuarios");
        self.repo.find_all().await
    }

    async fn get_usuario(&self, id: &str) -> AppResult<Option<Usuario>> {
        info!(id, "Buscando usuario");
        self.repo.find_by_id(id).await
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<Usuario>> {
        info!(email, "Buscando usuario por email");
        self.repo.find_by_email(email).await
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        self.repo.exists_by_email(email).await
    }

    async fn register(&self, datos: NuevoUsuario) -> AppResult<Usuario> {
        validar(&datos)?;
        info!(email = %datos.email, "Registrando usuario");

        let id = match datos.id.clone() {
            Some(id) => {
                if self.repo.exists_by_id(&id).await? {
                    return Err(AppError::conflict(format!("Ya existe un usuario con ID: {id}")));
                }
                id
            }
            None => nuevo_id(),
        };

        if self.repo.exists_by_email(&datos.email).await? {
            return Err(AppError::conflict(format!(
                "El email ya está registrado: {}",
                datos.email
            )));
        }

        let password = Password::new(&datos.password)?;
        self.repo.insert(Usuario::nuevo(id, datos, password)).await
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<Option<Usuario>> {
        info!(email, "Intento de login");

        match self.repo.find_by_email(email).await? {
            Some(usuario) if usuario.verify_password(password) => Ok(Some(usuario)),
            Some(_) => Ok(None),
            None => {
                Password::verify_dummy(password);
                Ok(None)
            }
        }
    }

    async fn update_usuario(&self, id: &str, cambios: ActualizarUsuario) -> AppResult<Usuario> {
        validar(&cambios)?;
        info!(id, "Actualizando usuario");

        let password = cambios.nueva_password()?;

        self.repo
            .update(id, cambios, password)
            .await?
            .ok_or_not_found()
    }

    async fn delete_usuario(&self, id: &str) -> AppResult<()> {
        info!(id, "Eliminando usuario");

        if !self.repo.delete_by_id(id).await? {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUsuarioRepository;
    use domain::{ROL_ADMIN, ROL_CLIENTE};

    fn nuevo_usuario(email: &str) -> NuevoUsuario {
        NuevoUsuario {
            id: None,
            nombre: "Juan Pérez".to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
            rol: ROL_CLIENTE.to_string(),
            foto_perfil_uri: None,
        }
    }

    fn usuario_guardado(id: &str, email: &str, password: &str) -> Usuario {
        let password = Password::new(password).unwrap();
        Usuario::nuevo(id.to_string(), nuevo_usuario(email), password)
    }

    fn actualizacion(password: Option<&str>) -> ActualizarUsuario {
        ActualizarUsuario {
            nombre: "Juan Actualizado".to_string(),
            rol: ROL_ADMIN.to_string(),
            foto_perfil_uri: Some("content://perfil".to_string()),
            password: password.map(str::to_string),
        }
    }

    fn manager(repo: MockUsuarioRepository) -> UsuarioManager {
        UsuarioManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repo = MockUsuarioRepository::new();
        repo.expect_exists_by_email()
            .withf(|email| email == "juan@test.com")
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_insert()
            .withf(|u| u.password_hash != "secret123" && u.verify_password("secret123"))
            .times(1)
            .returning(Ok);

        let usuario = manager(repo)
            .register(nuevo_usuario("juan@test.com"))
            .await
            .unwrap();

        assert_eq!(usuario.email, "juan@test.com");
        assert_eq!(usuario.rol, ROL_CLIENTE);
        assert_eq!(usuario.id.len(), 36);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_conflict_without_insert() {
        let mut repo = MockUsuarioRepository::new();
        repo.expect_exists_by_email().returning(|_| Ok(true));
        repo.expect_insert().never();

        let result = manager(repo).register(nuevo_usuario("juan@test.com")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_existing_client_id_is_conflict() {
        let mut repo = MockUsuarioRepository::new();
        repo.expect_exists_by_id()
            .withf(|id| id == "user123")
            .returning(|_| Ok(true));
        repo.expect_insert().never();

        let mut datos = nuevo_usuario("otro@test.com");
        datos.id = Some("user123".to_string());
        let result = manager(repo).register(datos).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_invalid_email_touches_nothing() {
        // No expectations: any repository call would panic
        let repo = MockUsuarioRepository::new();

        let result = manager(repo).register(nuevo_usuario("no-es-un-email")).await;

        let Err(AppError::InvalidFields(fields)) = result else {
            panic!("expected field errors");
        };
        assert!(fields.contains("email"));
    }

    #[tokio::test]
    async fn test_login_matches_only_exact_password() {
        let guardado = usuario_guardado("user123", "juan@test.com", "secret123");
        let mut repo = MockUsuarioRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(guardado.clone())));
        let service = manager(repo);

        let ok = service.login("juan@test.com", "secret123").await.unwrap();
        assert_eq!(ok.map(|u| u.id), Some("user123".to_string()));

        let wrong = service.login("juan@test.com", "otra").await.unwrap();
        assert!(wrong.is_none());
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_absent() {
        let mut repo = MockUsuarioRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));

        let result = manager(repo)
            .login("nadie@test.com", "secret123")
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut repo = MockUsuarioRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_update().times(1).returning(|_, _, _| Ok(None));

        let result = manager(repo)
            .update_usuario("missing", actualizacion(None))
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_invalid_fields_never_writes() {
        let repo = MockUsuarioRepository::new();
        let mut cambios = actualizacion(None);
        cambios.nombre = "   ".to_string();

        let result = manager(repo).update_usuario("user123", cambios).await;

        assert!(matches!(result, Err(AppError::InvalidFields(_))));
    }

    #[tokio::test]
    async fn test_update_keeps_password_and_email_when_not_supplied() {
        let guardado = usuario_guardado("user123", "juan@test.com", "secret123");
        let mut repo = MockUsuarioRepository::new();
        repo.expect_update()
            .withf(|id, _, password| id == "user123" && password.is_none())
            .times(1)
            .returning(move |_, cambios, password| {
                let mut usuario = guardado.clone();
                usuario.aplicar(cambios, password);
                Ok(Some(usuario))
            });

        let usuario = manager(repo)
            .update_usuario("user123", actualizacion(Some("")))
            .await
            .unwrap();

        assert_eq!(usuario.nombre, "Juan Actualizado");
        assert_eq!(usuario.email, "juan@test.com");
        assert_eq!(usuario.rol, ROL_ADMIN);
        assert!(usuario.verify_password("secret123"));
    }

    #[tokio::test]
    async fn test_update_replaces_password_when_supplied() {
        let guardado = usuario_guardado("user123", "juan@test.com", "secret123");
        let mut repo = MockUsuarioRepository::new();
        repo.expect_update()
            .withf(|_, _, password| password.as_ref().is_some_and(|p| p.verify("nueva456")))
            .times(1)
            .returning(move |_, cambios, password| {
                let mut usuario = guardado.clone();
                usuario.aplicar(cambios, password);
                Ok(Some(usuario))
            });

        let usuario = manager(repo)
            .update_usuario("user123", actualizacion(Some("nueva456")))
            .await
            .unwrap();

        assert!(usuario.verify_password("nueva456"));
        assert!(!usuario.verify_password("secret123"));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockUsuarioRepository::new();
        repo.expect_exists_by_id().never();
        repo.expect_delete_by_id().times(1).returning(|_| Ok(false));

        let result = manager(repo).delete_usuario("missing").await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_empty() {
        let mut repo = MockUsuarioRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![]));

        assert!(manager(repo).list_usuarios().await.unwrap().is_empty());
    }
}
