//! Catalog (Book Resource) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Book entity and repository trait
//! - `application/` - Validation pipeline and use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - CRUD over the book resource behind bearer authentication
//! - Field-level validation with per-field error messages
//! - Soft delete: removed rows stay in storage, excluded from default reads

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::postgres::PgBookRepository;
pub use presentation::router::books_router;

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgBookRepository as BookStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
