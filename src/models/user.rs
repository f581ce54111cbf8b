//! User (usuário) model and validation helpers

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

use super::enums::BoolLit;

/// User model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub nome: String,
    /// CPF in canonical `XXX.XXX.XXX-XX` form, unique per user
    pub cpf: String,
    /// Phone in canonical `XX XXXXX-XXXX` form
    pub telefone: String,
    pub usuario_ativo: bool,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub nome: String,
    pub cpf: String,
    pub telefone: String,
}

/// Update user request; every field optional, at least one required
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub nome: Option<String>,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub usuario_ativo: Option<BoolLit>,
}

/// Validated field set ready to be applied to a user row
#[derive(Debug, Default, PartialEq)]
pub struct UserChanges {
    pub nome: Option<String>,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub usuario_ativo: Option<bool>,
}

impl UpdateUser {
    /// Validate every present field and normalize formats.
    ///
    /// An edit with no recognized field, or with any invalid field, rejects
    /// the whole request so the stored row is never partially changed.
    pub fn into_changes(self) -> AppResult<UserChanges> {
        if self.nome.is_none()
            && self.cpf.is_none()
            && self.telefone.is_none()
            && self.usuario_ativo.is_none()
        {
            return Err(AppError::Validation(
                "at least one of nome, cpf, telefone, usuario_ativo is required".to_string(),
            ));
        }

        if let Some(ref nome) = self.nome {
            if nome.is_empty() {
                return Err(AppError::Validation("nome must not be empty".to_string()));
            }
        }

        Ok(UserChanges {
            nome: self.nome,
            cpf: self.cpf.as_deref().map(format_cpf).transpose()?,
            telefone: self.telefone.as_deref().map(format_telefone).transpose()?,
            usuario_ativo: self.usuario_ativo.as_ref().map(BoolLit::as_bool).transpose()?,
        })
    }
}

/// Normalize a CPF to its canonical `XXX.XXX.XXX-XX` form.
///
/// Accepts raw digits or an already-formatted value; anything that does not
/// reduce to exactly 11 digits is rejected, so normalization is idempotent.
pub fn format_cpf(raw: &str) -> AppResult<String> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | ' '))
        .collect();
    if digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "cpf must contain exactly 11 digits".to_string(),
        ));
    }
    Ok(format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    ))
}

/// Normalize a phone number to its canonical `XX XXXXX-XXXX` form
pub fn format_telefone(raw: &str) -> AppResult<String> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | ' ' | '(' | ')'))
        .collect();
    if digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "telefone must contain exactly 11 digits".to_string(),
        ));
    }
    Ok(format!("{} {}-{}", &digits[..2], &digits[2..7], &digits[7..]))
}
