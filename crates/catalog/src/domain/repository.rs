//! Repository Traits
//!
//! Storage interface for the book resource. `find_by_id` and `list` see
//! only non-deleted rows; the trashed-inclusive read is a separate,
//! explicit operation.

use crate::domain::entity::book::{Book, BookDraft};
use crate::error::CatalogResult;

/// Book repository interface
#[trait_variant::make(BookRepository: Send)]
pub trait LocalBookRepository {
    /// All non-deleted books, in storage (insertion) order
    async fn list(&self) -> CatalogResult<Vec<Book>>;

    /// All books including soft-deleted ones
    async fn list_with_trashed(&self) -> CatalogResult<Vec<Book>>;

    /// Find a non-deleted book by id
    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Book>>;

    /// Persist a new book; storage assigns id and timestamps
    async fn create(&self, draft: &BookDraft) -> CatalogResult<Book>;

    /// Overwrite the fields of a non-deleted book and bump `updated_at`
    ///
    /// Returns `None` when the id does not match a live row.
    async fn update(&self, id: i64, draft: &BookDraft) -> CatalogResult<Option<Book>>;

    /// Mark a non-deleted book as deleted
    ///
    /// Returns `false` when the id does not match a live row, so a repeat
    /// delete is distinguishable from a successful one.
    async fn soft_delete(&self, id: i64) -> CatalogResult<bool>;

    /// Whether a non-deleted book with this exact name exists
    ///
    /// `exclude_id` skips the record being updated, so renaming a book to
    /// its own current name is not a uniqueness violation.
    async fn exists_by_name(&self, name: &str, exclude_id: Option<i64>) -> CatalogResult<bool>;
}
