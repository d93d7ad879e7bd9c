//! # Reestr REST
//!
//! REST API layer using Axum for the Reestr organization directory.
//! Exposes the paginated directory search, health probes and the OpenAPI
//! document.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
