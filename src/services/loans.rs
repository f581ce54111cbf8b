//! Loan lifecycle service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::loan::{compute_due_date, parse_loan_date, CreateLoan, Loan, UpdateLoan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Loan> {
        self.repository.loans.get_by_id(id).await
    }

    /// List all loans
    pub async fn list_loans(&self) -> AppResult<Vec<Loan>> {
        self.repository.loans.list().await
    }

    /// Get loans for a user
    pub async fn get_user_loans(&self, usuario_id: i32) -> AppResult<Vec<Loan>> {
        // Verify user exists
        self.repository.users.get_by_id(usuario_id).await?;
        self.repository.loans.list_by_user(usuario_id).await
    }

    /// Create a new loan (borrow a book).
    ///
    /// Validates the request, computes the due date from the duration
    /// specifier, and persists the loan together with the book's flag flip
    /// as one transaction.
    pub async fn create_loan(&self, request: CreateLoan) -> AppResult<Loan> {
        request.validate()?;
        let data_emprestimo = parse_loan_date(&request.data_emprestimo)?;

        let user = self.repository.users.get_by_id(request.id_usuario).await?;
        if !user.usuario_ativo {
            return Err(AppError::Validation(format!(
                "Usuario with id {} is inactive",
                user.id
            )));
        }

        let book = self.repository.books.get_by_id(request.id_livro).await?;
        if !book.livro_ativo {
            return Err(AppError::Validation(format!(
                "Livro with id {} is inactive",
                book.id
            )));
        }

        let data_devolucao =
            compute_due_date(data_emprestimo, request.duracao, request.unidade_duracao)
                .ok_or_else(|| {
                    AppError::Validation("due date is out of the supported range".to_string())
                })?;

        if data_devolucao < data_emprestimo {
            return Err(AppError::Validation(
                "data_devolucao precedes data_emprestimo".to_string(),
            ));
        }

        if book.status_emprestado {
            return Err(AppError::Conflict(format!(
                "Livro with id {} is already on loan",
                book.id
            )));
        }

        self.repository
            .loans
            .create(user.id, book.id, data_emprestimo, data_devolucao)
            .await
    }

    /// Edit a loan: flip the finalized flag.
    ///
    /// The `status` field is required; finalizing a loan releases the book,
    /// reopening one claims it again.
    pub async fn update_loan(&self, id: i32, request: UpdateLoan) -> AppResult<Loan> {
        let loan = self.repository.loans.get_by_id(id).await?;

        let status = request.status.ok_or_else(|| {
            AppError::Validation("status field is required".to_string())
        })?;
        let finalizado = status.as_bool()?;

        self.repository.loans.set_finalizado(&loan, finalizado).await
    }
}
