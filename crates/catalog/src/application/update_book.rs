//! Update Book Use Case

use std::sync::Arc;

use crate::application::validate::{BookInput, validate_book};
use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::error::{CatalogError, CatalogResult};

/// Update book use case
pub struct UpdateBookUseCase<R>
where
    R: BookRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate the input and overwrite an existing book
    ///
    /// The lookup runs before validation, so an unknown id yields 404
    /// rather than a validation response. The record's own name is exempt
    /// from the uniqueness rule.
    pub async fn execute(&self, id: i64, input: BookInput) -> CatalogResult<Book> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(CatalogError::NotFound);
        }

        let draft = validate_book(self.repo.as_ref(), &input, Some(id)).await?;

        let book = self
            .repo
            .update(id, &draft)
            .await?
            .ok_or(CatalogError::NotFound)?;

        tracing::info!(book_id = book.id, name = %book.name, "Book updated");

        Ok(book)
    }
}
