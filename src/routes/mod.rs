pub mod health;
pub mod recommend;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/recommend",
            get(recommend::recommend_schema).post(recommend::recommend),
        )
        .route("/health", get(health::health_check))
        .with_state(state)
}
