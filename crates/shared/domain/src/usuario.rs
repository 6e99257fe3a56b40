//! Usuario domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::rol_por_defecto;
use crate::error::DomainResult;
use crate::password::Password;
use crate::validation::no_vacio;

/// Registered user of the mobile app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Usuario {
    pub id: String,
    pub nombre: String,
    /// Unique across all users
    pub email: String,
    /// Argon2 hash, never sent to clients
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub rol: String,
    pub foto_perfil_uri: Option<String>,
    pub fecha_registro: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,
}

impl Usuario {
    /// Build a not-yet-persisted user. Timestamps are provisional; the
    /// repository stamps its own on insert.
    pub fn nuevo(id: String, datos: NuevoUsuario, password: Password) -> Self {
        let now = Utc::now();
        Self {
            id,
            nombre: datos.nombre,
            email: datos.email,
            password_hash: password.into_string(),
            rol: datos.rol,
            foto_perfil_uri: datos.foto_perfil_uri,
            fecha_registro: now,
            fecha_actualizacion: now,
        }
    }

    /// Merge a profile update. Email and id never change; the password only
    /// changes when a replacement was supplied.
    pub fn aplicar(&mut self, cambios: ActualizarUsuario, password: Option<Password>) {
        self.nombre = cambios.nombre;
        self.rol = cambios.rol;
        self.foto_perfil_uri = cambios.foto_perfil_uri;
        if let Some(password) = password {
            self.password_hash = password.into_string();
        }
    }

    /// Check a plain text password against the stored hash.
    pub fn verify_password(&self, plain_text: &str) -> bool {
        Password::from_hash(self.password_hash.as_str()).verify(plain_text)
    }
}

/// Registration payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NuevoUsuario {
    /// Client-generated id; generated server-side when absent
    #[validate(
        custom(function = "no_vacio"),
        length(max = 36, message = "El ID no puede exceder 36 caracteres")
    )]
    pub id: Option<String>,
    #[serde(default)]
    #[validate(
        custom(function = "no_vacio"),
        length(max = 100, message = "El nombre no puede exceder 100 caracteres")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "Juan Pérez"))]
    pub nombre: String,
    #[serde(default)]
    #[validate(
        email(message = "El email no es válido"),
        length(max = 100, message = "El email no puede exceder 100 caracteres")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "juan@test.com"))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "no_vacio"))]
    pub password: String,
    #[serde(default = "rol_por_defecto")]
    #[validate(
        custom(function = "no_vacio"),
        length(max = 50, message = "El rol no puede exceder 50 caracteres")
    )]
    #[cfg_attr(feature = "openapi", schema(example = "Cliente"))]
    pub rol: String,
    pub foto_perfil_uri: Option<String>,
}

/// Profile update payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ActualizarUsuario {
    #[serde(default)]
    #[validate(
        custom(function = "no_vacio"),
        length(max = 100, message = "El nombre no puede exceder 100 caracteres")
    )]
    pub nombre: String,
    #[serde(default = "rol_por_defecto")]
    #[validate(
        custom(function = "no_vacio"),
        length(max = 50, message = "El rol no puede exceder 50 caracteres")
    )]
    pub rol: String,
    pub foto_perfil_uri: Option<String>,
    /// Replaces the current password only when present and non-empty
    pub password: Option<String>,
}

impl ActualizarUsuario {
    /// Hash the replacement password, if one was supplied.
    pub fn nueva_password(&self) -> DomainResult<Option<Password>> {
        match self.password.as_deref() {
            Some(plain) if !plain.is_empty() => Password::new(plain).map(Some),
            _ => Ok(None),
        }
    }
}

/// Login payload.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Credenciales {
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "juan@test.com"))]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ROL_ADMIN, ROL_CLIENTE};
    use crate::error::DomainError;
    use crate::validation::validar;

    fn nuevo_usuario() -> NuevoUsuario {
        NuevoUsuario {
            id: None,
            nombre: "Juan Pérez".to_string(),
            email: "juan@test.com".to_string(),
            password: "123456".to_string(),
            rol: ROL_CLIENTE.to_string(),
            foto_perfil_uri: None,
        }
    }

    fn usuario() -> Usuario {
        Usuario::nuevo(
            "1".to_string(),
            nuevo_usuario(),
            Password::new("123456").unwrap(),
        )
    }

    #[test]
    fn test_valid_registration() {
        assert!(validar(&nuevo_usuario()).is_ok());
    }

    #[test]
    fn test_registration_rejects_bad_fields() {
        let mut datos = nuevo_usuario();
        datos.nombre = "  ".to_string();
        datos.email = "no-es-email".to_string();
        datos.password = String::new();

        let Err(DomainError::InvalidFields(fields)) = validar(&datos) else {
            panic!("expected field errors");
        };
        assert!(fields.contains("nombre"));
        assert!(fields.contains("email"));
        assert!(fields.contains("password"));
    }

    #[test]
    fn test_rol_defaults_to_cliente() {
        let datos: NuevoUsuario = serde_json::from_str(
            r#"{"nombre":"Ana","email":"ana@test.com","password":"clave"}"#,
        )
        .unwrap();
        assert_eq!(datos.rol, ROL_CLIENTE);
        assert!(datos.id.is_none());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_value(usuario()).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "juan@test.com");
        assert!(json.get("fechaRegistro").is_some());
    }

    #[test]
    fn test_aplicar_keeps_email_and_password_without_replacement() {
        let mut usuario = usuario();
        let hash_before = usuario.password_hash.clone();
        let cambios = ActualizarUsuario {
            nombre: "Juan Actualizado".to_string(),
            rol: ROL_ADMIN.to_string(),
            foto_perfil_uri: Some("content://foto".to_string()),
            password: Some(String::new()),
        };

        let password = cambios.nueva_password().unwrap();
        usuario.aplicar(cambios, password);

        assert_eq!(usuario.nombre, "Juan Actualizado");
        assert_eq!(usuario.rol, ROL_ADMIN);
        assert_eq!(usuario.foto_perfil_uri.as_deref(), Some("content://foto"));
        assert_eq!(usuario.email, "juan@test.com");
        assert_eq!(usuario.password_hash, hash_before);
    }

    #[test]
    fn test_aplicar_replaces_password_when_supplied() {
        let mut usuario = usuario();
        let cambios = ActualizarUsuario {
            nombre: "Juan".to_string(),
            rol: ROL_CLIENTE.to_string(),
            foto_perfil_uri: None,
            password: Some("nueva".to_string()),
        };

        let password = cambios.nueva_password().unwrap();
        usuario.aplicar(cambios, password);

        assert!(usuario.verify_password("nueva"));
        assert!(!usuario.verify_password("123456"));
    }
}
