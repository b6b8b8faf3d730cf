//! In-process metrics for the city endpoints.

pub mod metrics;

pub use metrics::{MetricType, MetricsService, MetricsSnapshot, TimerSummary};

pub const CITIES_POST_TIMER: &str = "cities_post_timer";
pub const CITIES_POST_COUNTER: &str = "cities_post_counter";
pub const CITIES_GET_ALL_TIMER: &str = "cities_get_all_timer";
pub const CITIES_GET_ALL_COUNTER: &str = "cities_get_all_counter";

/// Builds a [`MetricsService`] with the city instruments pre-registered.
pub async fn city_metrics() -> MetricsService {
    let metrics = MetricsService::new();
    metrics.register(CITIES_POST_TIMER, MetricType::Timer).await;
    metrics.register(CITIES_POST_COUNTER, MetricType::Counter).await;
    metrics.register(CITIES_GET_ALL_TIMER, MetricType::Timer).await;
    metrics.register(CITIES_GET_ALL_COUNTER, MetricType::Counter).await;
    metrics
}
