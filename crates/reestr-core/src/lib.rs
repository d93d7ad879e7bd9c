//! # Reestr Core
//!
//! Core types, traits, and error definitions for the Reestr organization
//! directory. Every other crate in the workspace builds on the error taxonomy,
//! the `Organization` record, and the page math defined here.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use pagination::*;
pub use result::*;
