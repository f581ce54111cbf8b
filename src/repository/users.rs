//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User, UserChanges},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Usuario with id {} not found", id)))
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM usuarios ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// Check if a formatted CPF is already held by another user
    pub async fn cpf_exists(&self, cpf: &str, exclude_id: Option<i32>) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM usuarios WHERE cpf = $1 AND id != $2)")
                .bind(cpf)
                .bind(id)
                .fetch_one(&self.pool)
                .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM usuarios WHERE cpf = $1)")
                .bind(cpf)
                .fetch_one(&self.pool)
                .await?
        };
        Ok(exists)
    }

    /// Create a new user with pre-formatted cpf and telefone
    pub async fn create(&self, user: &CreateUser, cpf: &str, telefone: &str) -> AppResult<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO usuarios (nome, cpf, telefone)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&user.nome)
        .bind(cpf)
        .bind(telefone)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Apply a validated field set as one atomic update
    pub async fn update(&self, id: i32, changes: &UserChanges) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE usuarios SET
                nome = COALESCE($2, nome),
                cpf = COALESCE($3, cpf),
                telefone = COALESCE($4, telefone),
                usuario_ativo = COALESCE($5, usuario_ativo)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&changes.nome)
        .bind(&changes.cpf)
        .bind(&changes.telefone)
        .bind(changes.usuario_ativo)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Usuario with id {} not found", id)))
    }

    /// Soft-delete: clear the active flag
    pub async fn set_ativo(&self, id: i32, ativo: bool) -> AppResult<()> {
        let result = sqlx::query("UPDATE usuarios SET usuario_ativo = $2 WHERE id = $1")
            .bind(id)
            .bind(ativo)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Usuario with id {} not found",
                id
            )));
        }
        Ok(())
    }
}
