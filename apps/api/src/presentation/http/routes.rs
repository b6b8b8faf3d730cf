use super::{
    handlers::{cities, health, metrics},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{Router, extract::DefaultBodyLimit, middleware, routing::get};
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::get_metrics))
        // Cities CRUD
        .route(
            "/api/v1/cities",
            get(cities::list_cities).post(cities::create_city),
        )
        .route(
            "/api/v1/cities/{id}",
            get(cities::get_city)
                .put(cities::update_city)
                .delete(cities::delete_city),
        )
        .route(
            "/api/v1/cities/name/{name}",
            get(cities::get_city_by_name),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
