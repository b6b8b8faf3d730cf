pub mod entity;
pub mod errors;
pub mod repository;
pub mod state;

pub use entity::City;
pub use errors::DomainError;
pub use repository::CityRepository;
pub use state::State;
