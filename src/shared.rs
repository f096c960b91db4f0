//! Serialized dispatch for controllers fed from several sources.
//!
//! [`DoorController`] performs no locking of its own. When request readers
//! and door sensors deliver events from different threads, wrap the
//! controller in a [`SharedDoorController`]: every event takes the same lock,
//! so exactly one event is processed at a time.

use crate::collaborators::{Alarm, Door, EntryNotification, UserValidation};
use crate::controller::DoorController;
use crate::core::{DoorEvent, DoorState};
use crate::error::DoorControlResult;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

/// Cloneable handle to a controller behind a single mutex.
pub struct SharedDoorController<D, V, N, A> {
    inner: Arc<Mutex<DoorController<D, V, N, A>>>,
}

impl<D, V, N, A> Clone for SharedDoorController<D, V, N, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D, V, N, A> SharedDoorController<D, V, N, A>
where
    D: Door,
    V: UserValidation,
    N: EntryNotification,
    A: Alarm,
{
    pub fn new(controller: DoorController<D, V, N, A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Process one event under the lock.
    pub fn dispatch(&self, event: DoorEvent) -> DoorControlResult<()> {
        let mut controller = self.inner.lock();
        trace!(event = event.name(), "Acquired door controller lock");
        controller.handle(event)
    }

    pub fn request_entry(&self, id: i32) -> DoorControlResult<()> {
        self.dispatch(DoorEvent::RequestEntry { id })
    }

    pub fn door_opened(&self) -> DoorControlResult<()> {
        self.dispatch(DoorEvent::DoorOpened)
    }

    pub fn door_closed(&self) {
        self.inner.lock().door_closed();
    }

    pub fn state(&self) -> DoorState {
        self.inner.lock().state()
    }

    /// Run `f` against the controller while holding the lock.
    pub fn with_controller<R>(&self, f: impl FnOnce(&DoorController<D, V, N, A>) -> R) -> R {
        let controller = self.inner.lock();
        f(&*controller)
    }
}

impl<D, V, N, A> From<DoorController<D, V, N, A>> for SharedDoorController<D, V, N, A>
where
    D: Door,
    V: UserValidation,
    N: EntryNotification,
    A: Alarm,
{
    fn from(controller: DoorController<D, V, N, A>) -> Self {
        Self::new(controller)
    }
}
