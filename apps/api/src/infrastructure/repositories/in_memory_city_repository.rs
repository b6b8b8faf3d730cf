use crate::domain::city::{City, CityRepository, DomainError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

struct Inner {
    cities: BTreeMap<i64, City>,
    /// `None` once `i64::MAX` has been handed out.
    next_id: Option<i64>,
}

/// Process-local city storage. Ids start at 1 and are never reused.
pub struct InMemoryCityRepository {
    inner: Mutex<Inner>,
}

impl InMemoryCityRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                cities: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, DomainError> {
        self.inner
            .lock()
            .map_err(|_| DomainError::InfrastructureError("mutex poisoned".into()))
    }
}

impl Default for InMemoryCityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CityRepository for InMemoryCityRepository {
    async fn save(&self, mut city: City) -> Result<City, DomainError> {
        let mut inner = self.lock()?;
        let id = match city.id {
            Some(id) => id,
            None => inner.next_id.ok_or_else(|| {
                DomainError::InfrastructureError("city id space exhausted".into())
            })?,
        };
        if let Some(next) = inner.next_id {
            inner.next_id = if id >= next { id.checked_add(1) } else { Some(next) };
        }
        city.id = Some(id);
        inner.cities.insert(id, city.clone());
        Ok(city)
    }

    async fn find_all(&self) -> Result<Vec<City>, DomainError> {
        Ok(self.lock()?.cities.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<City>, DomainError> {
        Ok(self.lock()?.cities.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<City>, DomainError> {
        Ok(self
            .lock()?
            .cities
            .values()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        self.lock()?.cities.remove(&id);
        Ok(())
    }
}
