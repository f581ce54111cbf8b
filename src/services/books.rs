//! Book catalog service

use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// List books, optionally filtered by on-loan status
    pub async fn list_books(&self, emprestado: Option<bool>) -> AppResult<Vec<Book>> {
        self.repository.books.list(emprestado).await
    }

    /// Create a new book
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;
        self.repository.books.create(&book).await
    }

    /// Partially update an existing book
    pub async fn update_book(&self, id: i32, book: UpdateBook) -> AppResult<Book> {
        // Check if book exists
        self.repository.books.get_by_id(id).await?;

        let changes = book.into_changes()?;
        self.repository.books.update(id, &changes).await
    }

    /// Deactivate a book (soft delete)
    pub async fn deactivate_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.set_ativo(id, false).await
    }
}
