//! Events delivered to the door controller.

use serde::{Deserialize, Serialize};

/// One of the three things that can happen to a door.
///
/// Events serialize with an `event` tag so that scripted sequences can be
/// stored as JSON lines:
///
/// ```rust
/// use door_control::core::DoorEvent;
///
/// let event: DoorEvent = serde_json::from_str(r#"{"event":"request_entry","id":7}"#).unwrap();
/// assert_eq!(event, DoorEvent::RequestEntry { id: 7 });
///
/// let event: DoorEvent = serde_json::from_str(r#"{"event":"door_opened"}"#).unwrap();
/// assert_eq!(event, DoorEvent::DoorOpened);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DoorEvent {
    /// Someone presented an identifier and asked to be let in.
    RequestEntry {
        /// Opaque identifier, interpreted only by the validation collaborator.
        id: i32,
    },
    /// The door sensor reports the door has opened.
    DoorOpened,
    /// The door sensor reports the door has closed.
    DoorClosed,
}

impl DoorEvent {
    /// Stable label used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestEntry { .. } => "request_entry",
            Self::DoorOpened => "door_opened",
            Self::DoorClosed => "door_closed",
        }
    }

    /// Whether the event originates from the door's own sensor.
    pub fn is_sensor_event(&self) -> bool {
        matches!(self, Self::DoorOpened | Self::DoorClosed)
    }
}
