//! The door controller state machine.
//!
//! `DoorController` owns the current [`DoorState`] and the four collaborators.
//! Each entry point runs to completion before returning. A collaborator
//! failure aborts the event and is returned to the caller; the state stays
//! wherever it was recorded before the failing call.
//!
//! | Current    | entry (valid)          | entry (invalid) | door opened              | door closed |
//! |------------|------------------------|-----------------|--------------------------|-------------|
//! | `Closed`   | `Opening` (open+grant) | `Closed` (deny) | `Breached` (close+alarm) | `Closed`    |
//! | `Opening`  | `Opening` (deny)       | `Opening` (deny)| `Closing` (close)        | `Closed`    |
//! | `Closing`  | `Closing` (deny)       | `Closing` (deny)| `Closing` (close)        | `Closed`    |
//! | `Breached` | `Breached` (deny)      | `Breached` (deny)| `Closing` (close)       | `Closed`    |

use crate::collaborators::{Alarm, Door, EntryNotification, UserValidation};
use crate::core::{DoorEvent, DoorState};
use crate::error::{DoorAction, DoorControlError, DoorControlResult, EntryOutcome};
use tracing::{debug, error, info, warn};

/// Access controller for a single door.
///
/// # Example
///
/// ```rust
/// use door_control::collaborators::{Alarm, Door, EntryNotification, UserValidation};
/// use door_control::{CollaboratorResult, DoorController, DoorState};
///
/// struct Latch;
/// impl Door for Latch {
///     fn open(&mut self) -> CollaboratorResult<()> { Ok(()) }
///     fn close(&mut self) -> CollaboratorResult<()> { Ok(()) }
/// }
///
/// struct Staff;
/// impl UserValidation for Staff {
///     fn validate_entry_request(&self, id: i32) -> CollaboratorResult<bool> { Ok(id < 100) }
/// }
///
/// struct Silent;
/// impl EntryNotification for Silent {
///     fn notify_entry_granted(&mut self) -> CollaboratorResult<()> { Ok(()) }
///     fn notify_entry_denied(&mut self) -> CollaboratorResult<()> { Ok(()) }
/// }
/// impl Alarm for Silent {
///     fn raise_alarm(&mut self) -> CollaboratorResult<()> { Ok(()) }
/// }
///
/// let mut controller = DoorController::new(Latch, Staff, Silent, Silent);
/// controller.request_entry(7).unwrap();
/// assert_eq!(controller.state(), DoorState::Opening);
///
/// controller.door_opened().unwrap();
/// assert_eq!(controller.state(), DoorState::Closing);
///
/// controller.door_closed();
/// assert_eq!(controller.state(), DoorState::Closed);
/// ```
#[derive(Debug)]
pub struct DoorController<D, V, N, A> {
    door: D,
    validation: V,
    notification: N,
    alarm: A,
    state: DoorState,
}

impl<D, V, N, A> DoorController<D, V, N, A>
where
    D: Door,
    V: UserValidation,
    N: EntryNotification,
    A: Alarm,
{
    /// Create a controller bound to its collaborators, in the `Closed` state.
    pub fn new(door: D, validation: V, notification: N, alarm: A) -> Self {
        debug!("Initializing door controller");
        Self {
            door,
            validation,
            notification,
            alarm,
            state: DoorState::Closed,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> DoorState {
        self.state
    }

    /// React to one event.
    pub fn handle(&mut self, event: DoorEvent) -> DoorControlResult<()> {
        debug!(
            event = event.name(),
            sensor = event.is_sensor_event(),
            state = %self.state,
            "Handling door event"
        );
        match event {
            DoorEvent::RequestEntry { id } => self.request_entry(id),
            DoorEvent::DoorOpened => self.door_opened(),
            DoorEvent::DoorClosed => {
                self.door_closed();
                Ok(())
            }
        }
    }

    /// Someone presented `id` and asked to enter.
    ///
    /// Validation is consulted on every request. Entry is granted only when
    /// validation succeeds and the door is `Closed`; in that case the state
    /// moves to `Opening` before the door is told to open. Every other request
    /// is denied without actuation or state change. Exactly one notification
    /// is sent per successful call.
    pub fn request_entry(&mut self, id: i32) -> DoorControlResult<()> {
        let valid = self
            .validation
            .validate_entry_request(id)
            .map_err(|source| {
                error!(id, error = %source, "Entry validation failed");
                DoorControlError::Validation { id, source }
            })?;

        if valid && self.state.accepts_entry() {
            self.transition(DoorState::Opening, "request_entry");
            self.actuate(DoorAction::Open)?;
            self.notify(EntryOutcome::Granted)?;
            info!(id, "Entry granted");
        } else {
            self.notify(EntryOutcome::Denied)?;
            info!(id, valid, state = %self.state, "Entry denied");
        }
        Ok(())
    }

    /// The door sensor reports the door has opened.
    ///
    /// An opening in any state other than `Closed` is expected: the door is
    /// told to close and the state becomes `Closing`. An opening while
    /// `Closed` is a breach: the door is told to close, the alarm is raised
    /// and the state becomes `Breached`.
    pub fn door_opened(&mut self) -> DoorControlResult<()> {
        if self.state.expects_opening() {
            self.actuate(DoorAction::Close)?;
            self.transition(DoorState::Closing, "door_opened");
        } else {
            warn!("Door opened without an outstanding grant");
            self.actuate(DoorAction::Close)?;
            self.alarm.raise_alarm().map_err(|source| {
                error!(error = %source, "Alarm could not be raised");
                DoorControlError::Alarm { source }
            })?;
            self.transition(DoorState::Breached, "door_opened");
        }
        Ok(())
    }

    /// The door sensor reports the door has closed.
    ///
    /// Always returns the controller to `Closed`, from any state, without
    /// calling any collaborator.
    pub fn door_closed(&mut self) {
        self.transition(DoorState::Closed, "door_closed");
    }

    /// The door actuator.
    pub fn door(&self) -> &D {
        &self.door
    }

    /// The validation collaborator.
    pub fn validation(&self) -> &V {
        &self.validation
    }

    /// The notification sink.
    pub fn notification(&self) -> &N {
        &self.notification
    }

    /// The alarm.
    pub fn alarm(&self) -> &A {
        &self.alarm
    }

    /// Give back the collaborators, dropping the controller.
    pub fn into_parts(self) -> (D, V, N, A) {
        (self.door, self.validation, self.notification, self.alarm)
    }

    fn transition(&mut self, to: DoorState, event: &'static str) {
        let from = self.state;
        self.state = to;
        if from == to {
            return;
        }
        if to.is_error() {
            warn!(%from, %to, event, "Door entered error state");
        } else {
            info!(%from, %to, event, "Door state changed");
        }
    }

    fn actuate(&mut self, action: DoorAction) -> DoorControlResult<()> {
        let result = match action {
            DoorAction::Open => self.door.open(),
            DoorAction::Close => self.door.close(),
        };
        result.map_err(|source| {
            error!(%action, error = %source, state = %self.state, "Door actuation failed");
            DoorControlError::Actuation { action, source }
        })
    }

    fn notify(&mut self, outcome: EntryOutcome) -> DoorControlResult<()> {
        let result = match outcome {
            EntryOutcome::Granted => self.notification.notify_entry_granted(),
            EntryOutcome::Denied => self.notification.notify_entry_denied(),
        };
        result.map_err(|source| {
            error!(%outcome, error = %source, "Entry notification failed");
            DoorControlError::Notification { outcome, source }
        })
    }
}
