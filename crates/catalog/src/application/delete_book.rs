//! Delete Book Use Case

use std::sync::Arc;

use crate::domain::repository::BookRepository;
use crate::error::{CatalogError, CatalogResult};

/// Delete book use case
pub struct DeleteBookUseCase<R>
where
    R: BookRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Soft-delete a book
    ///
    /// A repeat delete fails with `NotFound`: the first delete removed the
    /// row from default visibility, so it no longer resolves.
    pub async fn execute(&self, id: i64) -> CatalogResult<()> {
        if !self.repo.soft_delete(id).await? {
            return Err(CatalogError::NotFound);
        }

        tracing::info!(book_id = id, "Book deleted");

        Ok(())
    }
}
