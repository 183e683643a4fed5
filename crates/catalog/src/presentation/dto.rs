//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::BookInput;
use crate::domain::entity::book::Book;

// ============================================================================
// Requests
// ============================================================================

/// Book write payload (create and update share the same field set)
///
/// Fields are decoded permissively; the validator owns "required" and type
/// rules so their failures come back as 422 field errors, not decode errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub available_qty: Option<Value>,
}

impl BookRequest {
    pub fn into_input(self) -> BookInput {
        BookInput {
            name: self.name,
            publication_date: self.publication_date,
            available_qty: self.available_qty,
        }
    }
}

/// Query parameters for the list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBooksQuery {
    /// Include soft-deleted rows
    ///
    /// Accepts `true`/`1`; any other value (or absence) reads as the
    /// default listing rather than a query rejection.
    #[serde(default, deserialize_with = "truthy_flag")]
    pub with_trashed: bool,
}

fn truthy_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(raw.as_deref(), Some("true") | Some("1")))
}

// ============================================================================
// Responses
// ============================================================================

/// Public JSON shape of a book
#[derive(Debug, Clone, Serialize)]
pub struct BookData {
    pub id: i64,
    pub name: String,
    /// Rendered as `YYYY-MM-DD`
    pub publication_date: String,
    pub available_qty: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Book> for BookData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            name: book.name.clone(),
            publication_date: book.publication_date.format("%Y-%m-%d").to_string(),
            available_qty: book.available_qty,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

/// List envelope
#[derive(Debug, Clone, Serialize)]
pub struct BookListResponse {
    pub data: Vec<BookData>,
}

impl BookListResponse {
    pub fn new(books: &[Book]) -> Self {
        Self {
            data: books.iter().map(BookData::from).collect(),
        }
    }
}

/// Single-book envelope
#[derive(Debug, Clone, Serialize)]
pub struct BookResponse {
    pub data: BookData,
}

impl BookResponse {
    pub fn new(book: &Book) -> Self {
        Self {
            data: BookData::from(book),
        }
    }
}

/// Write-confirmation envelope
#[derive(Debug, Clone, Serialize)]
pub struct BookMessageResponse {
    pub message: &'static str,
    pub data: BookData,
}

impl BookMessageResponse {
    pub fn created(book: &Book) -> Self {
        Self {
            message: "Book created successfully",
            data: BookData::from(book),
        }
    }

    pub fn updated(book: &Book) -> Self {
        Self {
            message: "Book updated successfully",
            data: BookData::from(book),
        }
    }
}

/// Plain message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            // Trailing period is part of the established contract
            message: "Book deleted successfully.",
        }
    }
}
