pub mod money;

use uuid::Uuid;

/// Error taxonomy shared by every crate in the workspace. The transport
/// layer maps these onto its own status codes; the core never does.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid state transition: cannot {action} a booking in status {from}")]
    InvalidStateTransition {
        from: &'static str,
        action: &'static str,
    },
}

impl DomainError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
