//! Get Book Use Case

use std::sync::Arc;

use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::error::{CatalogError, CatalogResult};

/// Get book use case
pub struct GetBookUseCase<R>
where
    R: BookRepository,
{
    repo: Arc<R>,
}

impl<R> GetBookUseCase<R>
where
    R: BookRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Look up a non-deleted book by id, or fail with `NotFound`
    pub async fn execute(&self, id: i64) -> CatalogResult<Book> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound)
    }
}
