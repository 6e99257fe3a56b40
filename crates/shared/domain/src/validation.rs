//! Input validation shared by every entity.
//!
//! Field rules are declared with `validator` derives on the input types;
//! this module turns a failed run into a [`DomainError::InvalidFields`].

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{DomainError, DomainResult, FieldErrors};

/// Run every field rule on `input`.
pub fn validar<T: Validate>(input: &T) -> DomainResult<()> {
    input
        .validate()
        .map_err(|errors| DomainError::InvalidFields(field_errors(&errors)))
}

/// Rejects empty and whitespace-only strings.
pub fn no_vacio(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("no puede estar vacío"));
        return Err(error);
    }
    Ok(())
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, violations) in errors.field_errors() {
        for violation in violations {
            let message = violation
                .message
                .as_ref()
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| violation.code.to_string());
            fields.add(camel_case(&field.to_string()), message);
        }
    }
    fields
}

/// Report fields under their JSON names (`usuario_id` → `usuarioId`).
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_vacio_rejects_whitespace() {
        assert!(no_vacio("").is_err());
        assert!(no_vacio("   ").is_err());
        assert!(no_vacio("Firulais").is_ok());
    }

    #[test]
    fn test_camel_case_field_names() {
        assert_eq!(camel_case("usuario_id"), "usuarioId");
        assert_eq!(camel_case("foto_perfil_uri"), "fotoPerfilUri");
        assert_eq!(camel_case("edad"), "edad");
    }
}
