use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/days/clear", post(handlers::clear_days_form))
        .route(
            "/api/profile",
            get(handlers::get_profile).post(handlers::save_profile),
        )
        .route(
            "/api/days",
            get(handlers::list_days).delete(handlers::clear_days),
        )
        .route(
            "/api/days/:day",
            get(handlers::get_day).put(handlers::upsert_day),
        )
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/analytics", get(handlers::get_analytics))
        .route("/api/session/reset", post(handlers::reset_session))
        .with_state(state)
}
