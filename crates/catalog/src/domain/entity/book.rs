//! Book Entity
//!
//! A catalog record with a soft-delete flag. The id is assigned by storage
//! and immutable afterwards; `deleted_at` set means the row is invisible to
//! default reads but still enumerable through the trashed-inclusive path.

use chrono::{DateTime, NaiveDate, Utc};

/// Book entity
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    /// Storage-assigned ID
    pub id: i64,
    /// Title, unique among non-deleted rows
    pub name: String,
    /// Publication date
    pub publication_date: NaiveDate,
    /// Copies available
    pub available_qty: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; `Some` means the row is trashed
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Book {
    /// Whether the row has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Validated field set for a book write, before storage assigns identity
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub name: String,
    pub publication_date: NaiveDate,
    pub available_qty: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_deleted() {
        let now = Utc::now();
        let mut book = Book {
            id: 1,
            name: "Wonderland".to_string(),
            publication_date: NaiveDate::from_ymd_opt(2020, 3, 10).unwrap(),
            available_qty: 10,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        assert!(!book.is_deleted());

        book.deleted_at = Some(now);
        assert!(book.is_deleted());
    }
}
