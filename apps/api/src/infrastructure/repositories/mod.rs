pub mod in_memory_city_repository;
pub mod sqlx_city_repository;

pub use in_memory_city_repository::InMemoryCityRepository;
pub use sqlx_city_repository::SqlxCityRepository;
