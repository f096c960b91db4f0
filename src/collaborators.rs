//! Capabilities the door controller depends on.
//!
//! The controller never talks to hardware, databases or people directly.
//! It is handed one implementation of each trait at construction and calls
//! them synchronously while reacting to an event. Implementations bound
//! their own latency; the controller blocks for as long as a call takes.

use crate::error::CollaboratorResult;

/// Physical door actuator.
pub trait Door {
    fn open(&mut self) -> CollaboratorResult<()>;

    fn close(&mut self) -> CollaboratorResult<()>;
}

/// Decides whether an identifier may enter.
///
/// Validation is a pure query, so it only needs shared access.
pub trait UserValidation {
    fn validate_entry_request(&self, id: i32) -> CollaboratorResult<bool>;
}

/// Tells the person at the door (and any log) how a request was decided.
pub trait EntryNotification {
    fn notify_entry_granted(&mut self) -> CollaboratorResult<()>;

    fn notify_entry_denied(&mut self) -> CollaboratorResult<()>;
}

/// Security alarm raised on a breach.
pub trait Alarm {
    fn raise_alarm(&mut self) -> CollaboratorResult<()>;
}

impl<T: Door + ?Sized> Door for Box<T> {
    fn open(&mut self) -> CollaboratorResult<()> {
        (**self).open()
    }

    fn close(&mut self) -> CollaboratorResult<()> {
        (**self).close()
    }
}

impl<T: Door + ?Sized> Door for &mut T {
    fn open(&mut self) -> CollaboratorResult<()> {
        (**self).open()
    }

    fn close(&mut self) -> CollaboratorResult<()> {
        (**self).close()
    }
}

impl<T: UserValidation + ?Sized> UserValidation for Box<T> {
    fn validate_entry_request(&self, id: i32) -> CollaboratorResult<bool> {
        (**self).validate_entry_request(id)
    }
}

impl<T: UserValidation + ?Sized> UserValidation for &T {
    fn validate_entry_request(&self, id: i32) -> CollaboratorResult<bool> {
        (**self).validate_entry_request(id)
    }
}

impl<T: UserValidation + ?Sized> UserValidation for &mut T {
    fn validate_entry_request(&self, id: i32) -> CollaboratorResult<bool> {
        (**self).validate_entry_request(id)
    }
}

impl<T: EntryNotification + ?Sized> EntryNotification for Box<T> {
    fn notify_entry_granted(&mut self) -> CollaboratorResult<()> {
        (**self).notify_entry_granted()
    }

    fn notify_entry_denied(&mut self) -> CollaboratorResult<()> {
        (**self).notify_entry_denied()
    }
}

impl<T: EntryNotification + ?Sized> EntryNotification for &mut T {
    fn notify_entry_granted(&mut self) -> CollaboratorResult<()> {
        (**self).notify_entry_granted()
    }

    fn notify_entry_denied(&mut self) -> CollaboratorResult<()> {
        (**self).notify_entry_denied()
    }
}

impl<T: Alarm + ?Sized> Alarm for Box<T> {
    fn raise_alarm(&mut self) -> CollaboratorResult<()> {
        (**self).raise_alarm()
    }
}

impl<T: Alarm + ?Sized> Alarm for &mut T {
    fn raise_alarm(&mut self) -> CollaboratorResult<()> {
        (**self).raise_alarm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollaboratorError;

    struct EvenIds;

    impl UserValidation for EvenIds {
        fn validate_entry_request(&self, id: i32) -> CollaboratorResult<bool> {
            Ok(id % 2 == 0)
        }
    }

    #[derive(Default)]
    struct CountingDoor {
        opened: usize,
    }

    impl Door for CountingDoor {
        fn open(&mut self) -> CollaboratorResult<()> {
            self.opened += 1;
            Ok(())
        }

        fn close(&mut self) -> CollaboratorResult<()> {
            Err(CollaboratorError::Unavailable("jammed".to_string()))
        }
    }

    #[test]
    fn boxed_trait_objects_forward_calls() {
        let validation: Box<dyn UserValidation> = Box::new(EvenIds);
        assert!(validation.validate_entry_request(4).unwrap());
        assert!(!validation.validate_entry_request(5).unwrap());

        let mut door: Box<dyn Door> = Box::new(CountingDoor::default());
        door.open().unwrap();
        assert!(door.close().is_err());
    }

    #[test]
    fn borrowed_collaborators_forward_calls() {
        let mut inner = CountingDoor::default();
        {
            let mut borrowed = &mut inner;
            Door::open(&mut borrowed).unwrap();
            Door::open(&mut borrowed).unwrap();
        }
        assert_eq!(inner.opened, 2);

        let validation = EvenIds;
        let borrowed = &validation;
        assert!(borrowed.validate_entry_request(0).unwrap());
    }
}
