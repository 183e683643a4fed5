//! Catalog Infrastructure Layer

pub mod postgres;
