//! Door Control: access control for a single physical door
//!
//! The crate is a small state machine sitting between a door's sensors and
//! the things it has to coordinate. It decides whether a presented
//! identifier may enter, tells the door to open and close, and raises an
//! alarm when the door opens with no entry granted.
//!
//! # Core Concepts
//!
//! - **State**: `DoorState` is `Closed`, `Opening`, `Closing` or `Breached`
//! - **Events**: `DoorEvent` is an entry request, a door-opened or a door-closed signal
//! - **Collaborators**: `Door`, `UserValidation`, `EntryNotification` and `Alarm`
//!   are traits injected at construction
//! - **Controller**: `DoorController` reacts to each event synchronously
//!
//! # Example
//!
//! ```rust
//! use door_control::console::{AllowList, LogAlarm, LogNotification, SimulatedDoor};
//! use door_control::{DoorController, DoorEvent, DoorState};
//!
//! let mut controller = DoorController::new(
//!     SimulatedDoor::new("front"),
//!     AllowList::new([0, 42]),
//!     LogNotification::new("front"),
//!     LogAlarm::new("front"),
//! );
//!
//! controller.handle(DoorEvent::RequestEntry { id: 42 }).unwrap();
//! assert_eq!(controller.state(), DoorState::Opening);
//!
//! controller.handle(DoorEvent::DoorOpened).unwrap();
//! controller.handle(DoorEvent::DoorClosed).unwrap();
//! assert_eq!(controller.state(), DoorState::Closed);
//!
//! // Nobody asked to come in.
//! controller.handle(DoorEvent::DoorOpened).unwrap();
//! assert_eq!(controller.state(), DoorState::Breached);
//! assert_eq!(controller.alarm().raised(), 1);
//! ```

pub mod collaborators;
pub mod console;
pub mod controller;
pub mod core;
pub mod error;
#[cfg(any(test, feature = "test-util"))]
pub mod fakes;
pub mod logging;
pub mod settings;
pub mod shared;

// Re-export commonly used types
pub use collaborators::{Alarm, Door, EntryNotification, UserValidation};
pub use controller::DoorController;
pub use crate::core::{DoorEvent, DoorState};
pub use error::{
    CollaboratorError, CollaboratorResult, DoorAction, DoorControlError, DoorControlResult,
    EntryOutcome,
};
pub use settings::Settings;
pub use shared::SharedDoorController;
