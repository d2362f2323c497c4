use serde::{Deserialize, Serialize};

use crate::models::BookingStatus;
use voyage_core::{DomainError, DomainResult};

/// Requested lifecycle transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransitionAction {
    Confirm,
    Cancel,
    Complete,
}

impl TransitionAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TransitionAction::Confirm => "confirm",
            TransitionAction::Cancel => "cancel",
            TransitionAction::Complete => "complete",
        }
    }
}

impl BookingStatus {
    /// The full transition table. Everything not listed is an
    /// `InvalidStateTransition`; the caller commits the returned status
    /// or leaves the booking untouched on error.
    pub fn apply(self, action: TransitionAction) -> DomainResult<BookingStatus> {
        use BookingStatus::*;
        use TransitionAction::*;

        match (self, action) {
            (Pending, Confirm) => Ok(Confirmed),
            (Pending, Cancel) => Ok(Cancelled),
            (Confirmed, Cancel) => Ok(Cancelled),
            (Confirmed, Complete) => Ok(Completed),
            (from, action) => Err(DomainError::InvalidStateTransition {
                from: from.as_str(),
                action: action.as_str(),
            }),
        }
    }
}
