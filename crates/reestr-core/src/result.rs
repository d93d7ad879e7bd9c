//! Result type aliases for Reestr.

use crate::ReestrError;

/// A specialized `Result` type for Reestr operations.
pub type ReestrResult<T> = Result<T, ReestrError>;
