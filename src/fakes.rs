//! Recording test doubles for the collaborator traits.
//!
//! Each fake counts the calls it receives and can be told to fail, so tests
//! can assert both the interaction with the controller and its behavior when
//! a collaborator breaks. Available in this crate's unit tests and, for
//! downstream crates, behind the `test-util` feature.
//!
//! ```rust
//! use door_control::fakes::{FakeAlarm, FakeDoor, FakeEntryNotification, FakeUserValidation};
//! use door_control::{DoorController, DoorState};
//!
//! let mut controller = DoorController::new(
//!     FakeDoor::new(),
//!     FakeUserValidation::accepting(),
//!     FakeEntryNotification::new(),
//!     FakeAlarm::new(),
//! );
//!
//! controller.request_entry(0).unwrap();
//! assert_eq!(controller.door().open_calls(), 1);
//! assert_eq!(controller.notification().granted_calls(), 1);
//! assert_eq!(controller.state(), DoorState::Opening);
//! ```

use crate::collaborators::{Alarm, Door, EntryNotification, UserValidation};
use crate::error::{CollaboratorError, CollaboratorResult};
use std::cell::{Cell, RefCell};

/// Door that records how often it was told to open and close.
#[derive(Debug, Default, Clone)]
pub struct FakeDoor {
    open_calls: usize,
    close_calls: usize,
    fail_on_open: bool,
    fail_on_close: bool,
}

impl FakeDoor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Door whose `open` always fails.
    pub fn failing_on_open() -> Self {
        Self {
            fail_on_open: true,
            ..Self::default()
        }
    }

    /// Door whose `close` always fails.
    pub fn failing_on_close() -> Self {
        Self {
            fail_on_close: true,
            ..Self::default()
        }
    }

    pub fn open_calls(&self) -> usize {
        self.open_calls
    }

    pub fn close_calls(&self) -> usize {
        self.close_calls
    }
}

impl Door for FakeDoor {
    fn open(&mut self) -> CollaboratorResult<()> {
        self.open_calls += 1;
        if self.fail_on_open {
            return Err(CollaboratorError::Unavailable("door motor offline".to_string()));
        }
        Ok(())
    }

    fn close(&mut self) -> CollaboratorResult<()> {
        self.close_calls += 1;
        if self.fail_on_close {
            return Err(CollaboratorError::Unavailable("door motor offline".to_string()));
        }
        Ok(())
    }
}

/// Validation that gives the same answer for every identifier.
#[derive(Debug, Clone)]
pub struct FakeUserValidation {
    answer: Cell<bool>,
    fail: bool,
    requested: RefCell<Vec<i32>>,
}

impl FakeUserValidation {
    pub fn new(answer: bool) -> Self {
        Self {
            answer: Cell::new(answer),
            fail: false,
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::new(true)
    }

    pub fn rejecting() -> Self {
        Self::new(false)
    }

    /// Validation whose store cannot be reached.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(false)
        }
    }

    /// Change the answer given to subsequent requests.
    ///
    /// Takes `&self` so the answer can be flipped while the fake is owned by
    /// a controller.
    pub fn set_answer(&self, answer: bool) {
        self.answer.set(answer);
    }

    /// Identifiers validated so far, in call order.
    pub fn requested_ids(&self) -> Vec<i32> {
        self.requested.borrow().clone()
    }

    pub fn calls(&self) -> usize {
        self.requested.borrow().len()
    }
}

impl UserValidation for FakeUserValidation {
    fn validate_entry_request(&self, id: i32) -> CollaboratorResult<bool> {
        self.requested.borrow_mut().push(id);
        if self.fail {
            return Err(CollaboratorError::Unavailable(
                "validation store unreachable".to_string(),
            ));
        }
        Ok(self.answer.get())
    }
}

/// Notification sink that keeps the latest message and per-outcome counts.
#[derive(Debug, Default, Clone)]
pub struct FakeEntryNotification {
    granted_calls: usize,
    denied_calls: usize,
    latest: Option<&'static str>,
    fail: bool,
}

impl FakeEntryNotification {
    pub const GRANTED: &'static str = "Entry is granted";
    pub const DENIED: &'static str = "Entry is denied";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn granted_calls(&self) -> usize {
        self.granted_calls
    }

    pub fn denied_calls(&self) -> usize {
        self.denied_calls
    }

    /// The most recent message, if any notification was sent.
    pub fn latest(&self) -> Option<&'static str> {
        self.latest
    }
}

impl EntryNotification for FakeEntryNotification {
    fn notify_entry_granted(&mut self) -> CollaboratorResult<()> {
        self.granted_calls += 1;
        if self.fail {
            return Err(CollaboratorError::Rejected("display offline".to_string()));
        }
        self.latest = Some(Self::GRANTED);
        Ok(())
    }

    fn notify_entry_denied(&mut self) -> CollaboratorResult<()> {
        self.denied_calls += 1;
        if self.fail {
            return Err(CollaboratorError::Rejected("display offline".to_string()));
        }
        self.latest = Some(Self::DENIED);
        Ok(())
    }
}

/// Alarm that counts how often it was raised.
#[derive(Debug, Default, Clone)]
pub struct FakeAlarm {
    raised: usize,
    fail: bool,
}

impl FakeAlarm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            raised: 0,
            fail: true,
        }
    }

    pub fn raised_calls(&self) -> usize {
        self.raised
    }

    pub fn has_been_raised(&self) -> bool {
        self.raised > 0
    }
}

impl Alarm for FakeAlarm {
    fn raise_alarm(&mut self) -> CollaboratorResult<()> {
        self.raised += 1;
        if self.fail {
            return Err(CollaboratorError::Unavailable("siren disconnected".to_string()));
        }
        Ok(())
    }
}
