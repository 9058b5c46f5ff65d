//! macOS event injector via CGEventPost.
//!
//! `MacOSInjector` owns one `CGEventSource` in HID system state for the life
//! of the process. Each `create_event()` call builds a `CGEvent` from that
//! source; `post()` hands it to `CGEventPost`, which delivers the event before
//! returning. Every CF object is released by `CfRef`'s `Drop`.

use std::ffi::c_void;
use std::time::Instant;

use crate::platform::{EventInjector, InputEvent, PlatformError, PreparedEvent, TapLocation};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// kCGHIDEventTap: inject at the HID level, alongside physical input.
const CG_HID_EVENT_TAP: u32 = 0;

/// kCGSessionEventTap: inject downstream of HID-level taps.
const CG_SESSION_EVENT_TAP: u32 = 1;

/// kCGEventSourceStateHIDSystemState = 1 -- use the real HID hardware state.
const CG_EVENT_SOURCE_STATE_HID_SYSTEM_STATE: i32 = 1;

/// CGEventType values.
const CG_EVENT_LEFT_MOUSE_DOWN: u32 = 1;
const CG_EVENT_LEFT_MOUSE_UP: u32 = 2;
const CG_EVENT_MOUSE_MOVED: u32 = 5;

/// kCGMouseButtonLeft. Ignored by the OS for move events but still required.
const CG_MOUSE_BUTTON_LEFT: u32 = 0;

// ---------------------------------------------------------------------------
// Raw FFI
// ---------------------------------------------------------------------------

type CGEventRef = *mut c_void;
type CGEventSourceRef = *mut c_void;

/// CGPoint with 64-bit CGFloat components.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct CGPoint {
    x: f64,
    y: f64,
}

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    /// Returns true if this process has been granted Accessibility permission.
    fn AXIsProcessTrusted() -> bool;
    fn CGEventSourceCreate(state_id: i32) -> CGEventSourceRef;
    fn CGEventCreateMouseEvent(
        source: CGEventSourceRef,
        mouse_type: u32,
        position: CGPoint,
        button: u32,
    ) -> CGEventRef;
    fn CGEventCreateKeyboardEvent(
        source: CGEventSourceRef,
        virtual_key: u16,
        key_down: bool,
    ) -> CGEventRef;
    fn CGEventPost(tap_location: u32, event: CGEventRef);
}

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    fn CFRelease(cf: *const c_void);
}

// ---------------------------------------------------------------------------
// Ownership wrapper
// ---------------------------------------------------------------------------

/// Owned, non-null Core Foundation reference. Released on drop.
struct CfRef(*mut c_void);

impl CfRef {
    /// Takes ownership of a +1 reference returned by a CF `Create` call.
    fn from_create(ptr: *mut c_void) -> Option<Self> {
        (!ptr.is_null()).then(|| CfRef(ptr))
    }

    fn as_ptr(&self) -> *mut c_void {
        self.0
    }
}

impl Drop for CfRef {
    fn drop(&mut self) {
        unsafe { CFRelease(self.0.cast_const()) }
    }
}

// ---------------------------------------------------------------------------
// Injector
// ---------------------------------------------------------------------------

/// Builds and posts CGEvents from a single HID-state event source.
pub struct MacOSInjector {
    source: CfRef,
    tap: u32,
}

impl MacOSInjector {
    pub fn new(tap: TapLocation) -> Result<Self, PlatformError> {
        if !unsafe { AXIsProcessTrusted() } {
            log::warn!(
                "injector: Accessibility permission not granted; macOS will drop synthetic \
                 events (System Settings > Privacy & Security > Accessibility)"
            );
        }

        let source = CfRef::from_create(unsafe {
            CGEventSourceCreate(CG_EVENT_SOURCE_STATE_HID_SYSTEM_STATE)
        })
        .ok_or_else(|| PlatformError::EventSource("CGEventSourceCreate returned null".into()))?;

        Ok(MacOSInjector {
            source,
            tap: tap_location(tap),
        })
    }

    /// Returns the raw (possibly null) result of `CGEventCreateMouseEvent`.
    fn mouse_event(&self, mouse_type: u32, x: i64, y: i64) -> CGEventRef {
        // Exact for every coordinate a display can have; larger values round.
        let position = CGPoint {
            x: x as f64,
            y: y as f64,
        };
        unsafe {
            CGEventCreateMouseEvent(
                self.source.as_ptr(),
                mouse_type,
                position,
                CG_MOUSE_BUTTON_LEFT,
            )
        }
    }

    /// Returns the raw (possibly null) result of `CGEventCreateKeyboardEvent`.
    fn keyboard_event(&self, key_code: u16, key_down: bool) -> CGEventRef {
        unsafe { CGEventCreateKeyboardEvent(self.source.as_ptr(), key_code, key_down) }
    }
}

impl EventInjector for MacOSInjector {
    fn create_event(&self, event: InputEvent) -> Result<Box<dyn PreparedEvent>, PlatformError> {
        let raw = match event {
            InputEvent::MouseMoved { x, y } => self.mouse_event(CG_EVENT_MOUSE_MOVED, x, y),
            InputEvent::LeftMouseDown { x, y } => {
                self.mouse_event(CG_EVENT_LEFT_MOUSE_DOWN, x, y)
            }
            InputEvent::LeftMouseUp { x, y } => self.mouse_event(CG_EVENT_LEFT_MOUSE_UP, x, y),
            InputEvent::KeyDown { key_code } => self.keyboard_event(key_code, true),
            InputEvent::KeyUp { key_code } => self.keyboard_event(key_code, false),
        };

        let handle = CfRef::from_create(raw)
            .ok_or_else(|| PlatformError::EventCreation(format!("{event:?}")))?;

        Ok(Box::new(MacOSEvent {
            handle,
            event,
            tap: self.tap,
        }))
    }
}

/// A constructed CGEvent bound to the tap it will be posted at.
struct MacOSEvent {
    handle: CfRef,
    event: InputEvent,
    tap: u32,
}

impl PreparedEvent for MacOSEvent {
    fn event(&self) -> InputEvent {
        self.event
    }

    fn post(&self) {
        let post_start = Instant::now();
        unsafe { CGEventPost(self.tap, self.handle.as_ptr()) };
        log::debug!(
            "injector: posted {:?} in {:.2}ms",
            self.event,
            post_start.elapsed().as_secs_f64() * 1000.0
        );
    }
}

// ---------------------------------------------------------------------------
// Constant mapping
// ---------------------------------------------------------------------------

fn tap_location(tap: TapLocation) -> u32 {
    match tap {
        TapLocation::Hid => CG_HID_EVENT_TAP,
        TapLocation::Session => CG_SESSION_EVENT_TAP,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_locations_match_cg_constants() {
        assert_eq!(tap_location(TapLocation::Hid), 0);
        assert_eq!(tap_location(TapLocation::Session), 1);
    }

    /// Creating (not posting) events has no desktop side effects.
    #[test]
    fn creates_events_without_posting() {
        let injector = MacOSInjector::new(TapLocation::Hid).unwrap();
        let down = injector
            .create_event(InputEvent::KeyDown { key_code: 36 })
            .unwrap();
        assert_eq!(down.event(), InputEvent::KeyDown { key_code: 36 });

        // Off-screen and negative coordinates are passed through unchanged.
        let moved = injector
            .create_event(InputEvent::MouseMoved { x: -50, y: 100_000 })
            .unwrap();
        assert_eq!(moved.event(), InputEvent::MouseMoved { x: -50, y: 100_000 });
    }
}
