//! HTTP Handlers
//!
//! The caller's [`Identity`] arrives through request extensions, inserted
//! by the auth middleware in front of this router. Handlers never consult
//! any ambient authentication state.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use std::sync::Arc;

use kernel::identity::Identity;

use crate::application::{
    CreateBookUseCase, DeleteBookUseCase, GetBookUseCase, ListBooksUseCase, UpdateBookUseCase,
};
use crate::domain::repository::BookRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{
    BookListResponse, BookMessageResponse, BookRequest, BookResponse, ListBooksQuery,
    MessageResponse,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /books
///
/// `?with_trashed=true` also returns soft-deleted rows.
pub async fn list<R>(
    State(state): State<CatalogAppState<R>>,
    Query(query): Query<ListBooksQuery>,
) -> CatalogResult<Json<BookListResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let books = ListBooksUseCase::new(state.repo.clone())
        .execute(query.with_trashed)
        .await?;

    Ok(Json(BookListResponse::new(&books)))
}

/// GET /books/{id}
pub async fn show<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<i64>,
) -> CatalogResult<Json<BookResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let book = GetBookUseCase::new(state.repo.clone()).execute(id).await?;

    Ok(Json(BookResponse::new(&book)))
}

/// POST /books
pub async fn create<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<BookRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let book = CreateBookUseCase::new(state.repo.clone())
        .execute(req.into_input())
        .await?;

    tracing::debug!(user_id = %identity.user_id, book_id = book.id, "Create handled");

    Ok((
        StatusCode::CREATED,
        Json(BookMessageResponse::created(&book)),
    ))
}

/// PUT /books/{id}
pub async fn update<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
    Json(req): Json<BookRequest>,
) -> CatalogResult<Json<BookMessageResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let book = UpdateBookUseCase::new(state.repo.clone())
        .execute(id, req.into_input())
        .await?;

    tracing::debug!(user_id = %identity.user_id, book_id = book.id, "Update handled");

    Ok(Json(BookMessageResponse::updated(&book)))
}

/// DELETE /books/{id}
pub async fn destroy<R>(
    State(state): State<CatalogAppState<R>>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
) -> CatalogResult<Json<MessageResponse>>
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    DeleteBookUseCase::new(state.repo.clone()).execute(id).await?;

    tracing::debug!(user_id = %identity.user_id, book_id = id, "Delete handled");

    Ok(Json(MessageResponse::deleted()))
}
