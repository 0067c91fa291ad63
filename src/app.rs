use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/status", get(handlers::get_status))
        .route("/api/checkin", post(handlers::check_in))
        .route("/api/history", get(handlers::get_history))
        .route("/api/reviews", get(handlers::get_reviews))
        .route("/api/review", post(handlers::weekly_review))
        .route("/api/export", get(handlers::export_data))
        .route("/api/import", post(handlers::import_data))
        .with_state(state)
}
