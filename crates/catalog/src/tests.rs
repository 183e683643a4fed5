//! Unit tests for the catalog crate
//!
//! Use-case tests run against an in-memory repository so the validation
//! pipeline and the soft-delete lifecycle are covered without a database.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde_json::json;

use crate::application::validate::BookInput;
use crate::application::{
    CreateBookUseCase, DeleteBookUseCase, GetBookUseCase, ListBooksUseCase, UpdateBookUseCase,
};
use crate::domain::entity::book::{Book, BookDraft};
use crate::domain::repository::BookRepository;
use crate::error::{CatalogError, CatalogResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct MemBookRepository {
    books: Arc<Mutex<Vec<Book>>>,
    next_id: Arc<AtomicI64>,
}

impl BookRepository for MemBookRepository {
    async fn list(&self) -> CatalogResult<Vec<Book>> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|b| !b.is_deleted())
            .cloned()
            .collect())
    }

    async fn list_with_trashed(&self) -> CatalogResult<Vec<Book>> {
        Ok(self.books.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Book>> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id && !b.is_deleted())
            .cloned())
    }

    async fn create(&self, draft: &BookDraft) -> CatalogResult<Book> {
        let now = Utc::now();
        let book = Book {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: draft.name.clone(),
            publication_date: draft.publication_date,
            available_qty: draft.available_qty,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.books.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn update(&self, id: i64, draft: &BookDraft) -> CatalogResult<Option<Book>> {
        let mut books = self.books.lock().unwrap();
        let Some(book) = books.iter_mut().find(|b| b.id == id && !b.is_deleted()) else {
            return Ok(None);
        };
        book.name = draft.name.clone();
        book.publication_date = draft.publication_date;
        book.available_qty = draft.available_qty;
        book.updated_at = Utc::now();
        Ok(Some(book.clone()))
    }

    async fn soft_delete(&self, id: i64) -> CatalogResult<bool> {
        let mut books = self.books.lock().unwrap();
        let Some(book) = books.iter_mut().find(|b| b.id == id && !b.is_deleted()) else {
            return Ok(false);
        };
        book.deleted_at = Some(Utc::now());
        Ok(true)
    }

    async fn exists_by_name(&self, name: &str, exclude_id: Option<i64>) -> CatalogResult<bool> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .any(|b| b.name == name && !b.is_deleted() && Some(b.id) != exclude_id))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn repo() -> Arc<MemBookRepository> {
    Arc::new(MemBookRepository::default())
}

fn wonderland() -> BookInput {
    BookInput {
        name: Some("Wonderland".to_string()),
        publication_date: Some("2020-03-10".to_string()),
        available_qty: Some(json!(10)),
    }
}

async fn seed(repo: &Arc<MemBookRepository>) -> Book {
    CreateBookUseCase::new(repo.clone())
        .execute(wonderland())
        .await
        .unwrap()
}

fn field_messages(err: CatalogError, field: &str) -> Vec<String> {
    match err {
        CatalogError::Validation(errors) => errors.get(field).cloned().unwrap_or_default(),
        other => panic!("expected validation error, got {other:?}"),
    }
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_assigns_id_and_timestamps() {
    let repo = repo();
    let book = seed(&repo).await;

    assert_eq!(book.id, 1);
    assert_eq!(book.name, "Wonderland");
    assert_eq!(book.available_qty, 10);
    assert_eq!(book.created_at, book.updated_at);
    assert!(!book.is_deleted());
}

#[tokio::test]
async fn test_create_empty_payload_reports_every_field() {
    let repo = repo();
    let err = CreateBookUseCase::new(repo.clone())
        .execute(BookInput::default())
        .await
        .unwrap_err();

    let CatalogError::Validation(errors) = err else {
        panic!("expected validation error");
    };
    assert_eq!(
        errors.get("name").unwrap(),
        &vec!["The name field is required.".to_string()]
    );
    assert_eq!(
        errors.get("publication_date").unwrap(),
        &vec!["The publication date field is required.".to_string()]
    );
    assert_eq!(
        errors.get("available_qty").unwrap(),
        &vec!["The available qty field is required.".to_string()]
    );
}

#[tokio::test]
async fn test_create_duplicate_name_rejected() {
    let repo = repo();
    seed(&repo).await;

    let err = CreateBookUseCase::new(repo.clone())
        .execute(wonderland())
        .await
        .unwrap_err();

    assert_eq!(
        field_messages(err, "name"),
        vec!["The name has already been taken.".to_string()]
    );
}

#[tokio::test]
async fn test_create_invalid_date_rejected() {
    let repo = repo();
    let mut input = wonderland();
    input.publication_date = Some("not-a-date".to_string());

    let err = CreateBookUseCase::new(repo.clone())
        .execute(input)
        .await
        .unwrap_err();

    assert_eq!(
        field_messages(err, "publication_date"),
        vec!["The publication date is not a valid date.".to_string()]
    );
}

#[tokio::test]
async fn test_create_non_integer_qty_rejected() {
    let repo = repo();

    for bad in [json!("ten"), json!(1.5), json!(true)] {
        let mut input = wonderland();
        input.available_qty = Some(bad);

        let err = CreateBookUseCase::new(repo.clone())
            .execute(input)
            .await
            .unwrap_err();

        assert_eq!(
            field_messages(err, "available_qty"),
            vec!["The available qty must be an integer.".to_string()]
        );
    }
}

#[tokio::test]
async fn test_create_accepts_numeric_string_qty() {
    let repo = repo();
    let mut input = wonderland();
    input.available_qty = Some(json!("10"));

    let book = CreateBookUseCase::new(repo.clone())
        .execute(input)
        .await
        .unwrap();
    assert_eq!(book.available_qty, 10);
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_update_own_name_is_not_a_duplicate() {
    let repo = repo();
    let book = seed(&repo).await;

    let mut input = wonderland();
    input.available_qty = Some(json!(3));

    let updated = UpdateBookUseCase::new(repo.clone())
        .execute(book.id, input)
        .await
        .unwrap();

    assert_eq!(updated.name, "Wonderland");
    assert_eq!(updated.available_qty, 3);
}

#[tokio::test]
async fn test_update_to_another_books_name_rejected() {
    let repo = repo();
    seed(&repo).await;

    let mut other = wonderland();
    other.name = Some("Looking Glass".to_string());
    let other = CreateBookUseCase::new(repo.clone())
        .execute(other)
        .await
        .unwrap();

    let err = UpdateBookUseCase::new(repo.clone())
        .execute(other.id, wonderland())
        .await
        .unwrap_err();

    assert_eq!(
        field_messages(err, "name"),
        vec!["The name has already been taken.".to_string()]
    );
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found_before_validation() {
    let repo = repo();

    // Even an invalid payload must yield 404 for an unknown id
    let err = UpdateBookUseCase::new(repo.clone())
        .execute(42, BookInput::default())
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::NotFound));
}

// ============================================================================
// Delete / soft-delete lifecycle
// ============================================================================

#[tokio::test]
async fn test_deleted_book_disappears_from_default_reads() {
    let repo = repo();
    let book = seed(&repo).await;

    DeleteBookUseCase::new(repo.clone())
        .execute(book.id)
        .await
        .unwrap();

    let err = GetBookUseCase::new(repo.clone())
        .execute(book.id)
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound));

    let visible = ListBooksUseCase::new(repo.clone()).execute(false).await.unwrap();
    assert!(visible.is_empty());

    let all = ListBooksUseCase::new(repo.clone()).execute(true).await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].is_deleted());
}

#[tokio::test]
async fn test_repeat_delete_is_not_found() {
    let repo = repo();
    let book = seed(&repo).await;

    let use_case = DeleteBookUseCase::new(repo.clone());
    use_case.execute(book.id).await.unwrap();

    let err = use_case.execute(book.id).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound));
}

#[tokio::test]
async fn test_trashed_name_can_be_reused() {
    let repo = repo();
    let book = seed(&repo).await;

    DeleteBookUseCase::new(repo.clone())
        .execute(book.id)
        .await
        .unwrap();

    let replacement = CreateBookUseCase::new(repo.clone())
        .execute(wonderland())
        .await
        .unwrap();
    assert_ne!(replacement.id, book.id);
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let repo = repo();
    seed(&repo).await;

    let mut second = wonderland();
    second.name = Some("Looking Glass".to_string());
    CreateBookUseCase::new(repo.clone())
        .execute(second)
        .await
        .unwrap();

    let books = ListBooksUseCase::new(repo.clone()).execute(false).await.unwrap();
    let names: Vec<&str> = books.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Wonderland", "Looking Glass"]);
}
