use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/attendance",
            get(handlers::get_attendance).post(handlers::put_attendance),
        )
        .route("/api/records", get(handlers::get_records))
        .route("/api/records/:index/field", post(handlers::set_record_field))
        .route("/api/records/:index/adjust", post(handlers::adjust_record_field))
        .route("/api/save", post(handlers::save))
        .with_state(state)
}
