use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const DUPLICATE_MESSAGE: &str = "This email is already on the waitlist";
pub const TOO_LARGE_MESSAGE: &str = "Request body too large";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_response_with(GENERIC_FAILURE_MESSAGE)
    }
}

impl AppError {
    /// Render as `{ "error": ... }`, using `failure_message` for server-side
    /// failures so internal detail never reaches the caller.
    pub fn into_response_with(self, failure_message: &str) -> Response {
        let code = self.code();
        if self.is_client_fault() {
            tracing::info!(code = code.as_str(), error = %self, "Request rejected");
        } else {
            // Log the error before it gets converted into a status response.
            tracing::error!(code = code.as_str(), error = ?self, "Request failed");
        }

        match self {
            AppError::InvalidInput(msg) => error_resp(StatusCode::BAD_REQUEST, &msg),
            AppError::Duplicate => error_resp(StatusCode::CONFLICT, DUPLICATE_MESSAGE),
            AppError::PayloadTooLarge => {
                error_resp(StatusCode::PAYLOAD_TOO_LARGE, TOO_LARGE_MESSAGE)
            }
            AppError::Database(_) | AppError::Internal(_) => {
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, failure_message)
            }
        }
    }
}

fn error_resp(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}
