//! JSON envelope and error mapping for the directory API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reestr_core::{ErrorResponse, ReestrError};
use serde::Serialize;
use tracing::{error, warn};

/// Envelope around every API payload: `data` on success, `error` otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Describes a failed request.
    pub fn failure(err: &ReestrError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorResponse::from_error(err)),
        }
    }
}

/// Handler error carrying a [`ReestrError`] to the HTTP edge.
#[derive(Debug)]
pub struct AppError(pub ReestrError);

impl From<ReestrError> for AppError {
    fn from(err: ReestrError) -> Self {
        Self(err)
    }
}

impl AppError {
    /// The HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let err = &self.0;

        if err.is_upstream_failure() {
            warn!(code = err.error_code(), status = status.as_u16(), "Registry failure: {}", err);
        } else if status.is_server_error() {
            error!(code = err.error_code(), "Request failed: {}", err);
        }

        (status, Json(ApiResponse::failure(err))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Wraps `data` in a successful envelope.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}
