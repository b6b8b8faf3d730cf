use crate::{application::cities::CityService, infrastructure::monitoring::MetricsService};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Present only with the postgres storage backend.
    pub db: Option<PgPool>,
    pub city_service: Arc<CityService>,
    pub metrics: Arc<MetricsService>,
}
