use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and which answer mode is active.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let mode = match state.generator {
        Some(_) => "generative",
        None => "rule_based",
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "career-api",
        "domains": state.knowledge.len(),
        "mode": mode,
    }))
}
