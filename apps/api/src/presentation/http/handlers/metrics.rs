use crate::{infrastructure::monitoring::MetricsSnapshot, presentation::http::state::AppState};
use axum::{Json, extract::State};

pub async fn get_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot().await)
}
