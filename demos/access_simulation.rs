//! Access Simulation
//!
//! Drives one door controller from two threads: a badge reader submitting
//! entry requests and the door sensor reporting openings and closings.
//!
//! Key concepts:
//! - Settings layered from `config/` and `DOOR__*` environment variables
//! - Console collaborators reporting through `tracing`
//! - One `SharedDoorController` serializing events from both sources
//!
//! Run with: cargo run --example access_simulation
//! Override the allow-list with: DOOR__ACCESS__ALLOWED_IDS=7,8 cargo run --example access_simulation

use door_control::console::{AllowList, LogAlarm, LogNotification, SimulatedDoor};
use door_control::logging::init_logging;
use door_control::{DoorController, DoorEvent, Settings, SharedDoorController};
use std::error::Error;
use std::thread;
use tracing::{error, info};

const BADGE_READER: &str = r#"
{"event":"request_entry","id":42}
{"event":"request_entry","id":99}
{"event":"request_entry","id":17}
"#;

const DOOR_SENSOR: &str = r#"
{"event":"door_opened"}
{"event":"door_closed"}
{"event":"door_opened"}
{"event":"door_closed"}
"#;

fn parse_script(script: &str) -> Result<Vec<DoorEvent>, serde_json::Error> {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(serde_json::from_str)
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::new()?;
    init_logging(&settings.logging)?;

    let name = settings.door.name.clone();
    let validation = AllowList::from_settings(&settings.access);
    info!(door = %name, allowed = validation.len(), "Starting access simulation");

    let controller = SharedDoorController::new(DoorController::new(
        SimulatedDoor::new(name.clone()),
        validation,
        LogNotification::new(name.clone()),
        LogAlarm::new(name.clone()),
    ));

    let sources = [("badge-reader", BADGE_READER), ("door-sensor", DOOR_SENSOR)];
    let mut workers = Vec::new();
    for (source, script) in sources {
        let events = parse_script(script)?;
        let controller = controller.clone();
        let worker = thread::Builder::new()
            .name(source.to_string())
            .spawn(move || {
                for event in events {
                    if let Err(e) = controller.dispatch(event) {
                        error!(event = event.name(), "Event aborted: {}", e);
                    }
                }
            })?;
        workers.push(worker);
    }

    for worker in workers {
        if worker.join().is_err() {
            error!("Event source thread panicked");
        }
    }

    controller.with_controller(|c| {
        info!(
            door = %name,
            state = %c.state(),
            granted = c.notification().granted(),
            denied = c.notification().denied(),
            alarms = c.alarm().raised(),
            "Simulation finished"
        );
    });

    Ok(())
}
