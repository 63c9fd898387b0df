use thiserror::Error;

#[derive(Debug, Error)]
pub enum KinError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} cannot refer to the person itself")]
    SelfReference { field: String },

    #[error("deathDate cannot be earlier than birthDate")]
    DeathBeforeBirth,

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("Person store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Person store unavailable: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl KinError {
    pub fn person_not_found(id: impl ToString) -> Self {
        KinError::NotFound {
            entity_type: "Person".into(),
            id: id.to_string(),
        }
    }

    /// True when the backing store failed, as opposed to a missing record or
    /// rejected input.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, KinError::StoreUnavailable(_) | KinError::Database(_))
    }
}

pub type KinResult<T> = Result<T, KinError>;
