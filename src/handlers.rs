use crate::errors::AppError;
use crate::models::{AdjustFieldRequest, AttendancePayload, CourseStats, SetFieldRequest};
use crate::session::{Notification, save_session};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(&session.stats()))
}

pub async fn get_attendance(State(state): State<AppState>) -> Json<AttendancePayload> {
    Json(state.backend.payload().await)
}

pub async fn put_attendance(
    State(state): State<AppState>,
    Json(payload): Json<AttendancePayload>,
) -> Result<Json<AttendancePayload>, AppError> {
    let stored = state.backend.replace(payload).await?;
    info!(
        "stored {} courses in {}",
        stored.subjects.len(),
        state.backend.path().display()
    );
    Ok(Json(stored))
}

pub async fn get_records(State(state): State<AppState>) -> Json<Vec<CourseStats>> {
    let session = state.session.lock().await;
    Json(session.stats())
}

pub async fn set_record_field(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(payload): Json<SetFieldRequest>,
) -> Result<Json<CourseStats>, AppError> {
    let mut session = state.session.lock().await;
    let stats = session.set_field(index, payload.field, &payload.value)?;
    Ok(Json(stats))
}

pub async fn adjust_record_field(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(payload): Json<AdjustFieldRequest>,
) -> Result<Json<CourseStats>, AppError> {
    let mut session = state.session.lock().await;
    let stats = session.adjust_field(index, payload.field, payload.delta)?;
    Ok(Json(stats))
}

/// Saves without holding the session lock, so overlapping saves race freely.
pub async fn save(State(state): State<AppState>) -> (StatusCode, Json<Notification>) {
    let snapshot = state.session.lock().await.records().to_vec();
    let notification = save_session(state.store.as_ref(), &snapshot).await;
    let status = if notification.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, Json(notification))
}
