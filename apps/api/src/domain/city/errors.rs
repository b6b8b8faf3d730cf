use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

impl DomainError {
    pub fn city_not_found_by_id(id: i64) -> Self {
        Self::NotFound(format!("City not found with ID {}", id))
    }

    pub fn city_not_found_by_name(name: &str) -> Self {
        Self::NotFound(format!("City not found with name {}", name))
    }
}
