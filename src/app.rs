use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/sample", post(handlers::sample))
        .route("/api/trend", get(handlers::trend))
        .route("/api/charts", get(handlers::charts))
        .route("/api/history", get(handlers::history))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
