//! Loans repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::loan::Loan,
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>("SELECT * FROM emprestimos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Emprestimo with id {} not found", id)))
    }

    /// List all loans
    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>("SELECT * FROM emprestimos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(loans)
    }

    /// List loans for a user
    pub async fn list_by_user(&self, usuario_id: i32) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>(
            "SELECT * FROM emprestimos WHERE usuario_id = $1 ORDER BY id",
        )
        .bind(usuario_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(loans)
    }

    /// Create a loan and flag the book, committed as one unit.
    ///
    /// The book flag is flipped with a guarded update; zero affected rows
    /// means another loan claimed the book between the service's availability
    /// check and this write, and the whole transaction rolls back.
    pub async fn create(
        &self,
        usuario_id: i32,
        livro_id: i32,
        data_emprestimo: NaiveDate,
        data_devolucao: NaiveDate,
    ) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let claimed = sqlx::query(
            "UPDATE livros SET status_emprestado = TRUE WHERE id = $1 AND status_emprestado = FALSE",
        )
        .bind(livro_id)
        .execute(&mut *tx)
        .await?;

        if claimed.rows_affected() == 0 {
            // Dropping the transaction rolls it back
            return Err(AppError::Conflict(format!(
                "Livro with id {} is already on loan",
                livro_id
            )));
        }

        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO emprestimos (data_emprestimo, data_devolucao, usuario_id, livro_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(data_emprestimo)
        .bind(data_devolucao)
        .bind(usuario_id)
        .bind(livro_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(loan)
    }

    /// Persist a new finalized flag and keep the book flag in sync,
    /// committed as one unit.
    ///
    /// Finalizing releases the book; reopening claims it again with the
    /// guarded update, failing with a conflict if another loan holds it.
    pub async fn set_finalizado(&self, loan: &Loan, finalizado: bool) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, Loan>(
            "UPDATE emprestimos SET status_finalizado = $2 WHERE id = $1 RETURNING *",
        )
        .bind(loan.id)
        .bind(finalizado)
        .fetch_one(&mut *tx)
        .await?;

        if finalizado != loan.status_finalizado {
            if finalizado {
                sqlx::query("UPDATE livros SET status_emprestado = FALSE WHERE id = $1")
                    .bind(loan.livro_id)
                    .execute(&mut *tx)
                    .await?;
            } else {
                let claimed = sqlx::query(
                    "UPDATE livros SET status_emprestado = TRUE WHERE id = $1 AND status_emprestado = FALSE",
                )
                .bind(loan.livro_id)
                .execute(&mut *tx)
                .await?;

                if claimed.rows_affected() == 0 {
                    return Err(AppError::Conflict(format!(
                        "Livro with id {} is already on loan",
                        loan.livro_id
                    )));
                }
            }
        }

        tx.commit().await?;

        Ok(updated)
    }
}
