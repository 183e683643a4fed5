//! PostgreSQL Repository Implementation
//!
//! Soft delete is a `deleted_at` timestamp; every default-path query
//! filters on `deleted_at IS NULL`. A partial unique index on live names
//! backs the uniqueness rule at the storage level as well.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::domain::entity::book::{Book, BookDraft};
use crate::domain::repository::BookRepository;
use crate::error::CatalogResult;

/// PostgreSQL-backed book repository
#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl BookRepository for PgBookRepository {
    async fn list(&self) -> CatalogResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                id,
                name,
                publication_date,
                available_qty,
                created_at,
                updated_at,
                deleted_at
            FROM books
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BookRow::into_book).collect())
    }

    async fn list_with_trashed(&self) -> CatalogResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                id,
                name,
                publication_date,
                available_qty,
                created_at,
                updated_at,
                deleted_at
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BookRow::into_book).collect())
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT
                id,
                name,
                publication_date,
                available_qty,
                created_at,
                updated_at,
                deleted_at
            FROM books
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BookRow::into_book))
    }

    async fn create(&self, draft: &BookDraft) -> CatalogResult<Book> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (name, publication_date, available_qty)
            VALUES ($1, $2, $3)
            RETURNING
                id,
                name,
                publication_date,
                available_qty,
                created_at,
                updated_at,
                deleted_at
            "#,
        )
        .bind(&draft.name)
        .bind(draft.publication_date)
        .bind(draft.available_qty)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_book())
    }

    async fn update(&self, id: i64, draft: &BookDraft) -> CatalogResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books
            SET name = $2,
                publication_date = $3,
                available_qty = $4,
                updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING
                id,
                name,
                publication_date,
                available_qty,
                created_at,
                updated_at,
                deleted_at
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(draft.publication_date)
        .bind(draft.available_qty)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BookRow::into_book))
    }

    async fn soft_delete(&self, id: i64) -> CatalogResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE books
            SET deleted_at = now(),
                updated_at = now()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn exists_by_name(&self, name: &str, exclude_id: Option<i64>) -> CatalogResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM books
                WHERE name = $1
                  AND deleted_at IS NULL
                  AND ($2::BIGINT IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    name: String,
    publication_date: NaiveDate,
    available_qty: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl BookRow {
    fn into_book(self) -> Book {
        Book {
            id: self.id,
            name: self.name,
            publication_date: self.publication_date,
            available_qty: self.available_qty,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}
