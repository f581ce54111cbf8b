//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookChanges, CreateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM livros WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Livro with id {} not found", id)))
    }

    /// List books, optionally filtered by on-loan status
    pub async fn list(&self, emprestado: Option<bool>) -> AppResult<Vec<Book>> {
        let books = if let Some(status) = emprestado {
            sqlx::query_as::<_, Book>(
                "SELECT * FROM livros WHERE status_emprestado = $1 ORDER BY id",
            )
            .bind(status)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, Book>("SELECT * FROM livros ORDER BY id")
                .fetch_all(&self.pool)
                .await?
        };
        Ok(books)
    }

    /// Create a new book; books start available
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO livros (isbn, titulo, autor, descricao)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.titulo)
        .bind(&book.autor)
        .bind(&book.descricao)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Apply a validated field set as one atomic update
    pub async fn update(&self, id: i32, changes: &BookChanges) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE livros SET
                isbn = COALESCE($2, isbn),
                titulo = COALESCE($3, titulo),
                autor = COALESCE($4, autor),
                descricao = COALESCE($5, descricao),
                livro_ativo = COALESCE($6, livro_ativo)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.isbn)
        .bind(&changes.titulo)
        .bind(&changes.autor)
        .bind(&changes.descricao)
        .bind(changes.livro_ativo)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Livro with id {} not found", id)))
    }

    /// Soft-delete: clear the active flag
    pub async fn set_ativo(&self, id: i32, ativo: bool) -> AppResult<()> {
        let result = sqlx::query("UPDATE livros SET livro_ativo = $2 WHERE id = $1")
            .bind(id)
            .bind(ativo)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Livro with id {} not found", id)));
        }
        Ok(())
    }
}
