//! Reference collaborators that report through `tracing`.
//!
//! These are for bring-up and demonstrations: a door that only remembers its
//! position, a static allow-list, and a notification sink and alarm that
//! write log lines. Production deployments supply their own drivers.

use crate::collaborators::{Alarm, Door, EntryNotification, UserValidation};
use crate::error::CollaboratorResult;
use crate::settings::AccessSettings;
use std::collections::HashSet;
use tracing::{info, warn};

/// Grants exactly the identifiers it was built with.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    allowed: HashSet<i32>,
}

impl AllowList {
    pub fn new(ids: impl IntoIterator<Item = i32>) -> Self {
        Self {
            allowed: ids.into_iter().collect(),
        }
    }

    pub fn from_settings(settings: &AccessSettings) -> Self {
        Self::new(settings.allowed_ids.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl UserValidation for AllowList {
    fn validate_entry_request(&self, id: i32) -> CollaboratorResult<bool> {
        Ok(self.allowed.contains(&id))
    }
}

/// Door without hardware: tracks the commanded position and logs each command.
#[derive(Debug, Clone)]
pub struct SimulatedDoor {
    name: String,
    open: bool,
}

impl SimulatedDoor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            open: false,
        }
    }

    /// Whether the last command was `open`.
    pub fn is_commanded_open(&self) -> bool {
        self.open
    }
}

impl Door for SimulatedDoor {
    fn open(&mut self) -> CollaboratorResult<()> {
        self.open = true;
        info!(door = %self.name, "Door commanded open");
        Ok(())
    }

    fn close(&mut self) -> CollaboratorResult<()> {
        self.open = false;
        info!(door = %self.name, "Door commanded closed");
        Ok(())
    }
}

/// Writes each entry decision to the log.
#[derive(Debug, Clone)]
pub struct LogNotification {
    name: String,
    granted: usize,
    denied: usize,
}

impl LogNotification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            granted: 0,
            denied: 0,
        }
    }

    pub fn granted(&self) -> usize {
        self.granted
    }

    pub fn denied(&self) -> usize {
        self.denied
    }
}

impl EntryNotification for LogNotification {
    fn notify_entry_granted(&mut self) -> CollaboratorResult<()> {
        self.granted += 1;
        info!(door = %self.name, total = self.granted, "Entry is granted");
        Ok(())
    }

    fn notify_entry_denied(&mut self) -> CollaboratorResult<()> {
        self.denied += 1;
        info!(door = %self.name, total = self.denied, "Entry is denied");
        Ok(())
    }
}

/// Alarm that logs a warning each time it is raised.
#[derive(Debug, Clone)]
pub struct LogAlarm {
    name: String,
    raised: usize,
}

impl LogAlarm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raised: 0,
        }
    }

    pub fn raised(&self) -> usize {
        self.raised
    }
}

impl Alarm for LogAlarm {
    fn raise_alarm(&mut self) -> CollaboratorResult<()> {
        self.raised += 1;
        warn!(door = %self.name, total = self.raised, "ALARM: door breached");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::DoorController;
    use crate::core::DoorState;

    #[test]
    fn allow_list_grants_only_listed_ids() {
        let list = AllowList::from_settings(&AccessSettings {
            allowed_ids: vec![1, 2, 2, 3],
        });

        assert_eq!(list.len(), 3);
        assert!(list.validate_entry_request(2).unwrap());
        assert!(!list.validate_entry_request(4).unwrap());
    }

    #[test]
    fn empty_allow_list_denies_everyone() {
        let list = AllowList::default();
        assert!(list.is_empty());
        assert!(!list.validate_entry_request(0).unwrap());
    }

    #[test]
    fn console_collaborators_drive_a_full_cycle() {
        let mut controller = DoorController::new(
            SimulatedDoor::new("lab"),
            AllowList::new([5]),
            LogNotification::new("lab"),
            LogAlarm::new("lab"),
        );

        controller.request_entry(6).unwrap();
        controller.request_entry(5).unwrap();
        assert!(controller.door().is_commanded_open());

        controller.door_opened().unwrap();
        assert!(!controller.door().is_commanded_open());
        controller.door_closed();

        controller.door_opened().unwrap();
        assert_eq!(controller.state(), DoorState::Breached);

        assert_eq!(controller.notification().granted(), 1);
        assert_eq!(controller.notification().denied(), 1);
        assert_eq!(controller.alarm().raised(), 1);
    }
}
