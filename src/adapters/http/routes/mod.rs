pub mod waitlist;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/waitlist", waitlist::router())
}

/// Liveness probe. Does not touch the database.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn health_router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
