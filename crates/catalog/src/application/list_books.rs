//! List Books Use Case

use std::sync::Arc;

use crate::domain::entity::book::Book;
use crate::domain::repository::BookRepository;
use crate::error::CatalogResult;

/// List books use case
pub struct ListBooksUseCase<R>
where
    R: BookRepository,
{
    repo: Arc<R>,
}

impl<R> ListBooksUseCase<R>
where
    R: BookRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch the catalog; `with_trashed` also includes soft-deleted rows
    pub async fn execute(&self, with_trashed: bool) -> CatalogResult<Vec<Book>> {
        if with_trashed {
            self.repo.list_with_trashed().await
        } else {
            self.repo.list().await
        }
    }
}
