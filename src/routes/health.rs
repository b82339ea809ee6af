use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /health - Liveness plus the size of the loaded dataset
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({ "status": "ok" });

    match state.recommender.repository().count().await {
        Ok(count) => {
            status["destinations"] = json!(count);
        }
        Err(e) => {
            tracing::warn!("Destination count unavailable: {}", e);
            status["destinations"] = json!({ "error": e.to_string() });
        }
    }

    Json(status)
}
