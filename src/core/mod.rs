//! Pure door-control values.
//!
//! This module contains the side-effect free part of the controller:
//! - `DoorState`, the four-state enumeration the controller persists
//! - `DoorEvent`, the three events the controller reacts to
//!
//! Everything that talks to hardware or people lives in
//! [`crate::controller`] and [`crate::collaborators`].

mod event;
mod state;

pub use event::DoorEvent;
pub use state::DoorState;
