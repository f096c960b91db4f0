//! Error types for the door controller and its collaborators.

use std::fmt;
use thiserror::Error;

/// Failure reported by a collaborator (door driver, validation store,
/// notification sink or alarm siren).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The collaborator could not be reached or is not ready.
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),

    /// The collaborator was reached but refused or failed the call.
    #[error("collaborator rejected the call: {0}")]
    Rejected(String),
}

/// Result type returned by collaborator calls.
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Door actuation requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorAction {
    Open,
    Close,
}

impl fmt::Display for DoorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Close => f.write_str("close"),
        }
    }
}

/// Outcome of an entry request, as notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    Granted,
    Denied,
}

impl fmt::Display for EntryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted => f.write_str("granted"),
            Self::Denied => f.write_str("denied"),
        }
    }
}

/// Errors that abort the processing of a single door event.
///
/// The controller never catches or retries a collaborator failure. It wraps
/// it with the call that failed and returns it; the state stays wherever it
/// was recorded before the failing call.
#[derive(Debug, Error)]
pub enum DoorControlError {
    #[error("door failed to {action}")]
    Actuation {
        action: DoorAction,
        #[source]
        source: CollaboratorError,
    },

    #[error("validation of entry request {id} failed")]
    Validation {
        id: i32,
        #[source]
        source: CollaboratorError,
    },

    #[error("entry {outcome} notification failed")]
    Notification {
        outcome: EntryOutcome,
        #[source]
        source: CollaboratorError,
    },

    #[error("alarm could not be raised")]
    Alarm {
        #[source]
        source: CollaboratorError,
    },
}

pub type DoorControlResult<T> = Result<T, DoorControlError>;
