//! Platform abstraction layer.
//!
//! Defines the `EventInjector` and `PreparedEvent` traits. Construction and
//! submission are separate steps so a gesture can build every event it needs
//! before the first one reaches the OS. Platform-specific implementations
//! live in child modules.

#[cfg(target_os = "macos")]
mod macos;
#[cfg(test)]
pub mod recording;

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Event description
// ---------------------------------------------------------------------------

/// One synthetic hardware event, described independently of any OS API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Warps the pointer to `(x, y)`.
    MouseMoved { x: i64, y: i64 },
    LeftMouseDown { x: i64, y: i64 },
    LeftMouseUp { x: i64, y: i64 },
    /// `key_code` is a macOS virtual key code (CGKeyCode).
    KeyDown { key_code: u16 },
    KeyUp { key_code: u16 },
}

/// Where in the OS event stream injected events enter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TapLocation {
    /// kCGHIDEventTap: the same level as physical hardware input.
    #[default]
    Hid,
    /// kCGSessionEventTap: downstream of HID-level taps.
    Session,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum PlatformError {
    /// The OS refused to create an event source.
    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    #[error("event source unavailable: {0}")]
    EventSource(String),

    /// The OS refused to create an event object.
    #[error("could not create {0} event")]
    EventCreation(String),

    /// No injection backend exists for this platform.
    #[error("{0}")]
    Unavailable(String),
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Builds OS-level event objects from `InputEvent` descriptions.
pub trait EventInjector {
    /// Constructs the OS object for `event` without submitting it.
    fn create_event(&self, event: InputEvent) -> Result<Box<dyn PreparedEvent>, PlatformError>;
}

/// A constructed event ready for submission to the system input pipeline.
///
/// Dropping it without posting releases the underlying OS object.
pub trait PreparedEvent {
    fn event(&self) -> InputEvent;

    /// Submits the event. The OS gives no success signal for this step.
    fn post(&self);
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

/// Returns the injector for the host platform.
pub fn create_event_injector(tap: TapLocation) -> Result<Box<dyn EventInjector>, PlatformError> {
    #[cfg(target_os = "macos")]
    {
        macos::create_event_injector(tap)
    }

    #[cfg(not(target_os = "macos"))]
    {
        log::debug!("platform: no injector for tap {:?} on this OS", tap);
        Err(PlatformError::Unavailable(format!(
            "event injection is only supported on macOS (this build targets {})",
            std::env::consts::OS
        )))
    }
}
