//! The door controller's state.
//!
//! `DoorState` is the only value the controller persists between events.
//! All methods are pure: they describe what a state means for the next
//! event without touching any collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of the door as far as the controller knows.
///
/// # Example
///
/// ```rust
/// use door_control::core::DoorState;
///
/// let state = DoorState::default();
/// assert_eq!(state, DoorState::Closed);
/// assert!(state.accepts_entry());
/// assert!(!state.expects_opening());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum DoorState {
    /// Door shut with no outstanding grant. Initial state.
    #[default]
    Closed,
    /// Entry was granted and the door has been told to open.
    Opening,
    /// The door opened and has been told to close again.
    Closing,
    /// The door opened while no grant was outstanding.
    Breached,
}

impl DoorState {
    /// Every state, in declaration order.
    pub const ALL: [DoorState; 4] = [
        DoorState::Closed,
        DoorState::Opening,
        DoorState::Closing,
        DoorState::Breached,
    ];

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Closed => "Closed",
            Self::Opening => "Opening",
            Self::Closing => "Closing",
            Self::Breached => "Breached",
        }
    }

    /// Whether a validated entry request may be granted from this state.
    ///
    /// Only a closed door with no outstanding grant accepts entry.
    pub fn accepts_entry(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Whether a door-opened sensor event is treated as expected.
    ///
    /// Any state other than `Closed` counts as evidence that an opening was
    /// expected. This includes `Breached`: a second opening while breached
    /// does not raise the alarm again.
    pub fn expects_opening(&self) -> bool {
        !self.accepts_entry()
    }

    /// Check if this is an error state.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Breached)
    }
}

impl fmt::Display for DoorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
