use super::entity::City;
use super::errors::DomainError;
use async_trait::async_trait;

/// Storage contract for city records, keyed by `id`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Inserts when `city.id` is `None`, otherwise overwrites (or creates) the
    /// row with that id. Returns the record as stored.
    async fn save(&self, city: City) -> Result<City, DomainError>;
    async fn find_all(&self) -> Result<Vec<City>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<City>, DomainError>;
    /// Exact, case-sensitive match. Lowest id wins when names repeat.
    async fn find_by_name(&self, name: &str) -> Result<Option<City>, DomainError>;
    /// Absent ids are a no-op.
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
}
