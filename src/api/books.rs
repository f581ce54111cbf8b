//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
    models::enums::BoolLit,
};

use super::ResultEnvelope;

/// Book list query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookQuery {
    /// Filter by on-loan status; accepts the usual boolean spellings
    pub emprestado: Option<String>,
}

/// List books, optionally filtered by on-loan status
#[utoipa::path(
    get,
    path = "/livros",
    tag = "livros",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>),
        (status = 400, description = "Invalid filter value")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<ResultEnvelope<Vec<Book>>>> {
    let filter = query
        .emprestado
        .as_deref()
        .map(BoolLit::parse_spelling)
        .transpose()?;

    let books = state.services.books.list_books(filter).await?;
    Ok(Json(ResultEnvelope::new(books)))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/livros/{id}",
    tag = "livros",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ResultEnvelope<Book>>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(ResultEnvelope::new(book)))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/livros",
    tag = "livros",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<ResultEnvelope<Book>>)> {
    let created = state.services.books.create_book(book).await?;
    Ok((StatusCode::CREATED, Json(ResultEnvelope::new(created))))
}

/// Partially update an existing book
#[utoipa::path(
    put,
    path = "/livros/{id}",
    tag = "livros",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(book): Json<UpdateBook>,
) -> AppResult<Json<ResultEnvelope<Book>>> {
    let updated = state.services.books.update_book(id, book).await?;
    Ok(Json(ResultEnvelope::new(updated)))
}

/// Deactivate a book
#[utoipa::path(
    delete,
    path = "/livros/{id}",
    tag = "livros",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deactivated"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.books.deactivate_book(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
