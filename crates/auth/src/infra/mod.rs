//! Auth Infrastructure Layer

pub mod postgres;
