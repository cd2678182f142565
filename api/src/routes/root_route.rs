//! GET / — minimal hello, doubles as a liveness check.

use axum::Json;
use serde_json::{Value, json};

/// Handler: GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello" }))
}
