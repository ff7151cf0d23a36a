use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppError,
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::{SignupRequest, WaitlistUseCases},
};

pub const JOIN_SUCCESS_MESSAGE: &str = "Successfully joined the waitlist!";
pub const JOIN_FAILED_MESSAGE: &str = "Failed to join waitlist. Please try again.";
pub const LIST_FAILED_MESSAGE: &str = "Failed to fetch waitlist data";

/// Signup bodies are two short strings; anything larger is rejected unread.
const MAX_JOIN_BODY_BYTES: usize = 16 * 1024;

#[derive(Deserialize)]
struct JoinPayload {
    email: Option<String>,
    name: Option<String>,
}

#[derive(Serialize)]
struct JoinResponse {
    message: &'static str,
}

/// Body of `GET /waitlist/list`, for both outcomes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListWaitlistResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<WaitlistEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListWaitlistResponse {
    pub fn ok(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            success: true,
            count: Some(entries.len()),
            data: Some(entries),
            error: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            error: Some(LIST_FAILED_MESSAGE.to_string()),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(join_waitlist).layer(DefaultBodyLimit::max(MAX_JOIN_BODY_BYTES)),
        )
        .route("/list", get(list_waitlist))
}

async fn join_waitlist(
    State(waitlist): State<Arc<WaitlistUseCases>>,
    payload: Result<Json<JoinPayload>, JsonRejection>,
) -> Response {
    // An unreadable body carries no email, so it fails the same check.
    let request = match payload {
        Ok(Json(payload)) => SignupRequest {
            email: payload.email,
            name: payload.name,
        },
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return AppError::PayloadTooLarge.into_response_with(JOIN_FAILED_MESSAGE);
        }
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable waitlist body");
            SignupRequest {
                email: None,
                name: None,
            }
        }
    };

    match waitlist.join(request).await {
        Ok(_) => Json(JoinResponse {
            message: JOIN_SUCCESS_MESSAGE,
        })
        .into_response(),
        Err(err) => err.into_response_with(JOIN_FAILED_MESSAGE),
    }
}

async fn list_waitlist(State(waitlist): State<Arc<WaitlistUseCases>>) -> Response {
    match waitlist.list().await {
        Ok(entries) => Json(ListWaitlistResponse::ok(entries)).into_response(),
        Err(err) => {
            tracing::error!(code = err.code().as_str(), error = ?err, "Error fetching waitlist");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ListWaitlistResponse::failed()),
            )
                .into_response()
        }
    }
}
