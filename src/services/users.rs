//! User management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{format_cpf, format_telefone, CreateUser, UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// List all users
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Create a new user
    pub async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        user.validate()?;
        let cpf = format_cpf(&user.cpf)?;
        let telefone = format_telefone(&user.telefone)?;

        // Existence check before insert; the UNIQUE constraint is the backstop
        if self.repository.users.cpf_exists(&cpf, None).await? {
            return Err(AppError::Conflict(format!(
                "cpf {} is already registered",
                cpf
            )));
        }

        self.repository.users.create(&user, &cpf, &telefone).await
    }

    /// Partially update an existing user
    pub async fn update_user(&self, id: i32, user: UpdateUser) -> AppResult<User> {
        // Check if user exists
        self.repository.users.get_by_id(id).await?;

        let changes = user.into_changes()?;

        // Check if the new CPF already belongs to another user
        if let Some(ref cpf) = changes.cpf {
            if self.repository.users.cpf_exists(cpf, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "cpf {} is already registered",
                    cpf
                )));
            }
        }

        self.repository.users.update(id, &changes).await
    }

    /// Deactivate a user (soft delete)
    pub async fn deactivate_user(&self, id: i32) -> AppResult<()> {
        self.repository.users.set_ativo(id, false).await
    }
}
