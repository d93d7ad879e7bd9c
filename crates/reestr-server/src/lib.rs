//! # Reestr Server Library
//!
//! Wiring of the directory's collaborators and server startup utilities.

pub mod app;
pub mod startup;
