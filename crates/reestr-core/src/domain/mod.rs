//! Directory domain model.

mod organization;

pub use organization::*;
