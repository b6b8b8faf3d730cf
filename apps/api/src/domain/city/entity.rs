use super::state::State;
use serde::{Deserialize, Serialize};

/// Persisted city record.
///
/// `id` is `None` until the storage layer assigns one on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: Option<i64>,
    pub name: String,
    pub state: State,
}

impl City {
    pub fn new(name: impl Into<String>, state: State) -> Self {
        Self {
            id: None,
            name: name.into(),
            state,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
