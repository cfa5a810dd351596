//! Error types for the task engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, TaskError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Task not found: {id}")]
    NotFound { id: String },

    #[error("'{query}' matches more than one task: {}", candidates.join(", "))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },

    #[error("Invalid {kind}: '{value}'")]
    Parse { kind: &'static str, value: String },
}

impl TaskError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn parse(kind: &'static str, value: impl Into<String>) -> Self {
        Self::Parse {
            kind,
            value: value.into(),
        }
    }
}
