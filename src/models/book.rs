//! Book (livro) model and validation helpers

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

use super::enums::BoolLit;

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub isbn: String,
    pub titulo: String,
    pub autor: String,
    pub descricao: Option<String>,
    /// True while exactly one non-finalized loan references this book
    pub status_emprestado: bool,
    pub livro_ativo: bool,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(custom(function = "validate_isbn"))]
    pub isbn: String,
    #[validate(length(min = 1, message = "titulo must not be empty"))]
    pub titulo: String,
    #[validate(length(min = 1, message = "autor must not be empty"))]
    pub autor: String,
    pub descricao: Option<String>,
}

/// Update book request; every field optional, at least one required
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub isbn: Option<String>,
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub descricao: Option<String>,
    pub livro_ativo: Option<BoolLit>,
}

/// Validated field set ready to be applied to a book row
#[derive(Debug, Default, PartialEq)]
pub struct BookChanges {
    pub isbn: Option<String>,
    pub titulo: Option<String>,
    pub autor: Option<String>,
    pub descricao: Option<String>,
    pub livro_ativo: Option<bool>,
}

impl UpdateBook {
    /// Validate every present field.
    ///
    /// `descricao` is applied whenever present, empty included. Any invalid
    /// field rejects the whole request.
    pub fn into_changes(self) -> AppResult<BookChanges> {
        if self.isbn.is_none()
            && self.titulo.is_none()
            && self.autor.is_none()
            && self.descricao.is_none()
            && self.livro_ativo.is_none()
        {
            return Err(AppError::Validation(
                "at least one of isbn, titulo, autor, descricao, livro_ativo is required"
                    .to_string(),
            ));
        }

        if let Some(ref isbn) = self.isbn {
            check_isbn(isbn)?;
        }
        if let Some(ref titulo) = self.titulo {
            if titulo.is_empty() {
                return Err(AppError::Validation("titulo must not be empty".to_string()));
            }
        }
        if let Some(ref autor) = self.autor {
            if autor.is_empty() {
                return Err(AppError::Validation("autor must not be empty".to_string()));
            }
        }

        Ok(BookChanges {
            isbn: self.isbn,
            titulo: self.titulo,
            autor: self.autor,
            descricao: self.descricao,
            livro_ativo: self.livro_ativo.as_ref().map(BoolLit::as_bool).transpose()?,
        })
    }
}

/// An ISBN is stored as text but must be integer-shaped
pub fn check_isbn(isbn: &str) -> AppResult<()> {
    if isbn.is_empty() || !isbn.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Validation(
            "isbn must be an integer-shaped string".to_string(),
        ));
    }
    Ok(())
}

fn validate_isbn(isbn: &str) -> Result<(), validator::ValidationError> {
    check_isbn(isbn)
        .map_err(|_| validator::ValidationError::new("isbn must be an integer-shaped string"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_isbn() {
        assert!(check_isbn("9788535902778").is_ok());
        assert!(check_isbn("978-85-359-0277-8").is_err());
        assert!(check_isbn("").is_err());
        assert!(check_isbn("abc").is_err());
    }

    #[test]
    fn test_empty_edit_rejected() {
        assert!(UpdateBook::default().into_changes().is_err());
    }

    #[test]
    fn test_empty_descricao_is_applied() {
        let edit = UpdateBook {
            descricao: Some(String::new()),
            ..Default::default()
        };
        let changes = edit.into_changes().unwrap();
        assert_eq!(changes.descricao.as_deref(), Some(""));
    }

    #[test]
    fn test_single_invalid_field_rejects_whole_edit() {
        let edit = UpdateBook {
            titulo: Some("Dom Casmurro".to_string()),
            isbn: Some("not-a-number".to_string()),
            ..Default::default()
        };
        assert!(edit.into_changes().is_err());
    }
}
