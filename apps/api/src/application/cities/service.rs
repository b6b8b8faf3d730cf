use super::dto::{CityDto, MessageResponse};
use super::mapper;
use crate::domain::city::{CityRepository, DomainError};
use std::sync::Arc;
use tracing::info;

/// Orchestrates city lookups and mutations against a `CityRepository`.
pub struct CityService {
    repository: Arc<dyn CityRepository>,
}

impl CityService {
    pub fn new(repository: Arc<dyn CityRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_new_city(&self, dto: CityDto) -> Result<MessageResponse, DomainError> {
        info!("Creating a new city");

        let saved = self.repository.save(mapper::to_entity(dto)).await?;
        let id = saved.id.ok_or_else(|| {
            DomainError::InfrastructureError("storage returned a city without an id".into())
        })?;

        Ok(message("City successfully created with ID ", id))
    }

    pub async fn get_all_cities(&self) -> Result<Vec<CityDto>, DomainError> {
        info!("Fetching all cities");

        let cities = self.repository.find_all().await?;
        Ok(cities.into_iter().map(mapper::to_dto).collect())
    }

    pub async fn get_city_by_id(&self, id: i64) -> Result<CityDto, DomainError> {
        info!("Searching city id {}", id);

        self.repository
            .find_by_id(id)
            .await?
            .map(mapper::to_dto)
            .ok_or_else(|| DomainError::city_not_found_by_id(id))
    }

    pub async fn get_city_by_name(&self, name: &str) -> Result<CityDto, DomainError> {
        info!("Searching city name {}", name);

        self.repository
            .find_by_name(name)
            .await?
            .map(mapper::to_dto)
            .ok_or_else(|| DomainError::city_not_found_by_name(name))
    }

    /// Replaces `name` and `state` of the city stored under `id`. The payload's
    /// own `id` is ignored so the path id always selects the row written.
    pub async fn update_city_by_id(
        &self,
        id: i64,
        dto: CityDto,
    ) -> Result<MessageResponse, DomainError> {
        info!("Updating city with id {}", id);

        self.verify_if_exists(id).await?;

        let mut city = mapper::to_entity(dto);
        city.id = Some(id);
        let updated = self.repository.save(city).await?;

        Ok(message(
            "City successfully updated with ID ",
            updated.id.unwrap_or(id),
        ))
    }

    pub async fn delete_city_by_id(&self, id: i64) -> Result<MessageResponse, DomainError> {
        info!("Deleting city with id {}", id);

        self.verify_if_exists(id).await?;
        self.repository.delete_by_id(id).await?;

        Ok(message("City successfully deleted with ID ", id))
    }

    async fn verify_if_exists(&self, id: i64) -> Result<(), DomainError> {
        match self.repository.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::city_not_found_by_id(id)),
        }
    }
}

fn message(prefix: &str, id: i64) -> MessageResponse {
    MessageResponse::new(format!("{}{}", prefix, id))
}
