use crate::domain::city::{City, CityRepository, DomainError, State};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info, instrument};

#[derive(FromRow)]
struct CityRow {
    id: i64,
    name: String,
    state: String,
}

impl TryFrom<CityRow> for City {
    type Error = DomainError;

    fn try_from(r: CityRow) -> Result<Self, Self::Error> {
        let state = r.state.parse::<State>().map_err(|e| {
            error!(city_id = r.id, stored_state = %r.state, "Stored city has an invalid state");
            DomainError::InfrastructureError(e.to_string())
        })?;
        Ok(City {
            id: Some(r.id),
            name: r.name,
            state,
        })
    }
}

fn db_error(e: sqlx::Error) -> DomainError {
    error!(database_error = %e, "City query failed");
    DomainError::InfrastructureError(e.to_string())
}

/// Postgres-backed storage for the `cities` table.
pub struct SqlxCityRepository {
    pool: PgPool,
}

impl SqlxCityRepository {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxCityRepository with connection pool");
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for SqlxCityRepository {
    #[instrument(level = "debug", skip(self, city), fields(city_id = ?city.id))]
    async fn save(&self, city: City) -> Result<City, DomainError> {
        let row: CityRow = match city.id {
            None => {
                sqlx::query_as(
                    "INSERT INTO cities (name, state) VALUES ($1, $2) RETURNING id, name, state",
                )
                .bind(&city.name)
                .bind(city.state.code())
                .fetch_one(&self.pool)
                .await
            }
            Some(id) => {
                sqlx::query_as(
                    "INSERT INTO cities (id, name, state) VALUES ($1, $2, $3) \
                     ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, state = EXCLUDED.state \
                     RETURNING id, name, state",
                )
                .bind(id)
                .bind(&city.name)
                .bind(city.state.code())
                .fetch_one(&self.pool)
                .await
            }
        }
        .map_err(db_error)?;

        debug!(city_id = row.id, "City saved");
        row.try_into()
    }

    #[instrument(level = "debug", skip(self))]
    async fn find_all(&self) -> Result<Vec<City>, DomainError> {
        let rows: Vec<CityRow> = sqlx::query_as("SELECT id, name, state FROM cities ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        debug!(count = rows.len(), "Fetched cities");
        rows.into_iter().map(City::try_from).collect()
    }

    #[instrument(level = "debug", skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<City>, DomainError> {
        let row: Option<CityRow> =
            sqlx::query_as("SELECT id, name, state FROM cities WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(City::try_from).transpose()
    }

    #[instrument(level = "debug", skip(self))]
    async fn find_by_name(&self, name: &str) -> Result<Option<City>, DomainError> {
        let row: Option<CityRow> = sqlx::query_as(
            "SELECT id, name, state FROM cities WHERE name = $1 ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(City::try_from).transpose()
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        debug!(rows_affected = result.rows_affected(), "City delete executed");
        Ok(())
    }
}
