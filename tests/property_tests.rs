//! Property-based tests for the door controller.
//!
//! These tests use proptest to check the controller against a reference
//! transition table over arbitrary identifiers and event sequences.

use door_control::fakes::{FakeAlarm, FakeDoor, FakeEntryNotification, FakeUserValidation};
use door_control::{DoorController, DoorEvent, DoorState};
use proptest::prelude::*;

type TestController =
    DoorController<FakeDoor, FakeUserValidation, FakeEntryNotification, FakeAlarm>;

/// Collaborator calls made while handling a single event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Calls {
    validated: usize,
    open: usize,
    close: usize,
    granted: usize,
    denied: usize,
    alarm: usize,
}

impl Calls {
    fn snapshot(c: &TestController) -> Self {
        Self {
            validated: c.validation().calls(),
            open: c.door().open_calls(),
            close: c.door().close_calls(),
            granted: c.notification().granted_calls(),
            denied: c.notification().denied_calls(),
            alarm: c.alarm().raised_calls(),
        }
    }

    fn since(self, before: Self) -> Self {
        Self {
            validated: self.validated - before.validated,
            open: self.open - before.open,
            close: self.close - before.close,
            granted: self.granted - before.granted,
            denied: self.denied - before.denied,
            alarm: self.alarm - before.alarm,
        }
    }
}

/// The transition table, written out independently of the controller.
fn expected(state: DoorState, event: DoorEvent, valid: bool) -> (DoorState, Calls) {
    use DoorState::*;

    match event {
        DoorEvent::RequestEntry { .. } if valid && state == Closed => (
            Opening,
            Calls {
                validated: 1,
                open: 1,
                granted: 1,
                ..Calls::default()
            },
        ),
        DoorEvent::RequestEntry { .. } => (
            state,
            Calls {
                validated: 1,
                denied: 1,
                ..Calls::default()
            },
        ),
        DoorEvent::DoorOpened if state == Closed => (
            Breached,
            Calls {
                close: 1,
                alarm: 1,
                ..Calls::default()
            },
        ),
        DoorEvent::DoorOpened => (
            Closing,
            Calls {
                close: 1,
                ..Calls::default()
            },
        ),
        DoorEvent::DoorClosed => (Closed, Calls::default()),
    }
}

fn controller() -> TestController {
    DoorController::new(
        FakeDoor::new(),
        FakeUserValidation::accepting(),
        FakeEntryNotification::new(),
        FakeAlarm::new(),
    )
}

/// Events that bring a fresh controller to `state`.
fn path_to(state: DoorState) -> Vec<DoorEvent> {
    match state {
        DoorState::Closed => vec![],
        DoorState::Opening => vec![DoorEvent::RequestEntry { id: 0 }],
        DoorState::Closing => vec![DoorEvent::RequestEntry { id: 0 }, DoorEvent::DoorOpened],
        DoorState::Breached => vec![DoorEvent::DoorOpened],
    }
}

fn controller_in(state: DoorState) -> TestController {
    let mut c = controller();
    for event in path_to(state) {
        c.handle(event).unwrap();
    }
    assert_eq!(c.state(), state);
    c
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4usize) -> DoorState {
        DoorState::ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..3u8, id in any::<i32>()) -> DoorEvent {
        match variant {
            0 => DoorEvent::RequestEntry { id },
            1 => DoorEvent::DoorOpened,
            _ => DoorEvent::DoorClosed,
        }
    }
}

proptest! {
    #[test]
    fn valid_request_from_closed_is_granted(id in any::<i32>()) {
        let mut c = controller();

        c.request_entry(id).unwrap();

        prop_assert_eq!(c.door().open_calls(), 1);
        prop_assert_eq!(c.notification().granted_calls(), 1);
        prop_assert_eq!(c.notification().denied_calls(), 0);
        prop_assert_eq!(c.state(), DoorState::Opening);
        prop_assert_eq!(c.validation().requested_ids(), vec![id]);
    }

    #[test]
    fn invalid_request_is_denied_in_every_state(id in any::<i32>(), state in arbitrary_state()) {
        let mut c = controller_in(state);
        c.validation().set_answer(false);
        let before = Calls::snapshot(&c);

        c.request_entry(id).unwrap();

        let calls = Calls::snapshot(&c).since(before);
        prop_assert_eq!(calls.denied, 1);
        prop_assert_eq!(calls.granted, 0);
        prop_assert_eq!(calls.open, 0);
        prop_assert_eq!(c.state(), state);
    }

    #[test]
    fn valid_request_outside_closed_is_denied(id in any::<i32>(), state in arbitrary_state()) {
        prop_assume!(state != DoorState::Closed);
        let mut c = controller_in(state);
        let before = Calls::snapshot(&c);

        c.request_entry(id).unwrap();

        let calls = Calls::snapshot(&c).since(before);
        prop_assert_eq!(calls.denied, 1);
        prop_assert_eq!(calls.granted, 0);
        prop_assert_eq!(calls.open, 0);
        prop_assert_eq!(c.state(), state);
    }

    #[test]
    fn door_closed_always_closes_silently(state in arbitrary_state()) {
        let mut c = controller_in(state);
        let before = Calls::snapshot(&c);

        c.door_closed();

        prop_assert_eq!(Calls::snapshot(&c).since(before), Calls::default());
        prop_assert_eq!(c.state(), DoorState::Closed);
    }

    #[test]
    fn controller_follows_transition_table(
        steps in prop::collection::vec((arbitrary_event(), any::<bool>()), 0..40)
    ) {
        let mut c = controller();
        let mut model = DoorState::Closed;

        for (event, valid) in steps {
            c.validation().set_answer(valid);
            let before = Calls::snapshot(&c);

            c.handle(event).unwrap();

            let (next, calls) = expected(model, event, valid);
            prop_assert_eq!(Calls::snapshot(&c).since(before), calls);
            prop_assert_eq!(c.state(), next);
            model = next;
        }
    }

    #[test]
    fn every_request_gets_exactly_one_notification(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut c = controller();
        let requests = events
            .iter()
            .filter(|e| matches!(e, DoorEvent::RequestEntry { .. }))
            .count();

        for event in events {
            c.handle(event).unwrap();
        }

        let notes = c.notification();
        prop_assert_eq!(notes.granted_calls() + notes.denied_calls(), requests);
        prop_assert_eq!(c.door().open_calls(), notes.granted_calls());
    }

    #[test]
    fn event_roundtrip_serialization(event in arbitrary_event()) {
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: DoorEvent = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(event, deserialized);
    }
}
