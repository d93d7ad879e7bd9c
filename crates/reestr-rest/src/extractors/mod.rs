//! Custom Axum extractors.

mod directory_query;

pub use directory_query::*;
