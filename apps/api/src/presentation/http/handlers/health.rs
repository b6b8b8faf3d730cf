use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    storage: &'static str,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let storage = match &state.db {
        Some(db) => match sqlx::query("SELECT 1").execute(db).await {
            Ok(_) => "up",
            Err(e) => {
                tracing::error!("Health check failed: Database unreachable: {}", e);
                "down"
            }
        },
        None => "memory",
    };

    let (code, status) = if storage == "down" {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    } else {
        (StatusCode::OK, "healthy")
    };

    let response = HealthResponse {
        status,
        storage,
        version: env!("CARGO_PKG_VERSION"),
    };

    (code, Json(response))
}
