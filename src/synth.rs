//! Event synthesis: turns a parsed request into an ordered event sequence.
//!
//! Each gesture constructs every event it needs before posting the first,
//! so a construction failure submits nothing. Once posting starts there is
//! no rollback. The hold between the down and up halves is a real-time
//! blocking sleep on the calling thread.

use std::thread;
use std::time::{Duration, Instant};

use crate::cli::{ClickRequest, Command, KeystrokeRequest};
use crate::platform::{EventInjector, InputEvent, PlatformError, PreparedEvent};

/// Runs the gesture described by `command`.
pub fn perform(injector: &dyn EventInjector, command: &Command) -> Result<(), PlatformError> {
    match command {
        Command::Click(request) => perform_click(injector, request),
        Command::Keystroke(request) => perform_keystroke(injector, request),
    }
}

/// Move to `(x, y)`, press the left button, hold, release.
pub fn perform_click(
    injector: &dyn EventInjector,
    request: &ClickRequest,
) -> Result<(), PlatformError> {
    let ClickRequest { x, y, hold_micros } = *request;

    let moved = injector.create_event(InputEvent::MouseMoved { x, y })?;
    let down = injector.create_event(InputEvent::LeftMouseDown { x, y })?;
    let up = injector.create_event(InputEvent::LeftMouseUp { x, y })?;

    moved.post();
    press_and_release(&*down, &*up, hold_micros);
    Ok(())
}

/// Press `key_code`, hold, release.
pub fn perform_keystroke(
    injector: &dyn EventInjector,
    request: &KeystrokeRequest,
) -> Result<(), PlatformError> {
    let KeystrokeRequest {
        key_code,
        hold_micros,
    } = *request;

    let down = injector.create_event(InputEvent::KeyDown { key_code })?;
    let up = injector.create_event(InputEvent::KeyUp { key_code })?;

    press_and_release(&*down, &*up, hold_micros);
    Ok(())
}

fn press_and_release(down: &dyn PreparedEvent, up: &dyn PreparedEvent, hold_micros: u64) {
    down.post();
    let held_since = Instant::now();
    thread::sleep(Duration::from_micros(hold_micros));
    up.post();
    log::debug!(
        "synth: {:?} -> {:?} held {:.2}ms (requested {}us)",
        down.event(),
        up.event(),
        held_since.elapsed().as_secs_f64() * 1000.0,
        hold_micros
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
