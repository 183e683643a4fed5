//! Catalog Router
//!
//! Routes only; the auth middleware is layered on by the application so
//! this router stays independent of the session store.

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::repository::BookRepository;
use crate::infra::postgres::PgBookRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the books router with PostgreSQL repository
pub fn books_router(repo: PgBookRepository) -> Router {
    books_router_generic(repo)
}

/// Create a generic books router for any repository implementation
pub fn books_router_generic<R>(repo: R) -> Router
where
    R: BookRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::list::<R>).post(handlers::create::<R>))
        .route(
            "/{id}",
            get(handlers::show::<R>)
                .put(handlers::update::<R>)
                .delete(handlers::destroy::<R>),
        )
        .with_state(state)
}
