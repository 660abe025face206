pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::optimizer::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/linkedin/analyze", post(handlers::handle_analyze))
        .with_state(state)
}
