//! REST API controllers.

pub mod health_controller;
pub mod organization_controller;

pub use health_controller::*;
pub use organization_controller::*;
