//! Catalog Entities

pub mod book;

pub use book::{Book, BookDraft};
