//! Loan management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan, UpdateLoan},
};

use super::ResultEnvelope;

/// List all loans
#[utoipa::path(
    get,
    path = "/emprestimos",
    tag = "emprestimos",
    responses(
        (status = 200, description = "List of loans", body = Vec<Loan>)
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ResultEnvelope<Vec<Loan>>>> {
    let loans = state.services.loans.list_loans().await?;
    Ok(Json(ResultEnvelope::new(loans)))
}

/// Get loan details by ID
#[utoipa::path(
    get,
    path = "/emprestimos/{id}",
    tag = "emprestimos",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan details", body = Loan),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn get_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ResultEnvelope<Loan>>> {
    let loan = state.services.loans.get_by_id(id).await?;
    Ok(Json(ResultEnvelope::new(loan)))
}

/// Get loans for a specific user
#[utoipa::path(
    get,
    path = "/usuarios/{id}/emprestimos",
    tag = "emprestimos",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User's loans", body = Vec<Loan>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_loans(
    State(state): State<crate::AppState>,
    Path(usuario_id): Path<i32>,
) -> AppResult<Json<ResultEnvelope<Vec<Loan>>>> {
    let loans = state.services.loans.get_user_loans(usuario_id).await?;
    Ok(Json(ResultEnvelope::new(loans)))
}

/// Create a new loan (borrow a book)
#[utoipa::path(
    post,
    path = "/emprestimos",
    tag = "emprestimos",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = Loan),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "User or book not found"),
        (status = 409, description = "Book already on loan")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateLoan>,
) -> AppResult<(StatusCode, Json<ResultEnvelope<Loan>>)> {
    let loan = state.services.loans.create_loan(request).await?;
    Ok((StatusCode::CREATED, Json(ResultEnvelope::new(loan))))
}

/// Edit a loan: flip the finalized flag
#[utoipa::path(
    put,
    path = "/emprestimos/{id}",
    tag = "emprestimos",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    request_body = UpdateLoan,
    responses(
        (status = 200, description = "Loan updated", body = Loan),
        (status = 400, description = "Missing or invalid status value"),
        (status = 404, description = "Loan not found"),
        (status = 409, description = "Book already on loan")
    )
)]
pub async fn update_loan(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateLoan>,
) -> AppResult<Json<ResultEnvelope<Loan>>> {
    let loan = state.services.loans.update_loan(id, request).await?;
    Ok(Json(ResultEnvelope::new(loan)))
}
