//! Create Book Use Case

use std::sync::Arc;

use crate::application::validate::{BookInput, validate_book};
use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::error::CatalogResult;

/// Create book use case
pub struct CreateBookUseCase<R>
where
    R: BookRepository,
{
    repo: Arc<R>,
}

impl<R> CreateBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate the input and persist a new book
    pub async fn execute(&self, input: BookInput) -> CatalogResult<Book> {
        let draft = validate_book(self.repo.as_ref(), &input, None).await?;

        let book = self.repo.create(&draft).await?;

        tracing::info!(book_id = book.id, name = %book.name, "Book created");

        Ok(book)
    }
}
