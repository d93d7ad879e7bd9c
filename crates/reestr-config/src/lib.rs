//! # Reestr Config
//!
//! Configuration management for the Reestr directory.
//! Supports layered configuration from files and environment variables,
//! validated up front.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
