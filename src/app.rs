use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/today", get(handlers::get_today))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/streak", get(handlers::get_streak))
        .route("/api/toggle", post(handlers::toggle))
        .with_state(state)
}
