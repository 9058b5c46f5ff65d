//! macOS platform backend.
//!
//! Injection: CGEventCreate* + CGEventPost (synchronous) via `MacOSInjector`.
//!
//! Posting requires Accessibility permission. Without it the OS drops the
//! events silently, so `MacOSInjector::new()` only warns. Guide the user to:
//!   System Settings > Privacy & Security > Accessibility

mod injector;

use injector::MacOSInjector;

use crate::platform::{EventInjector, PlatformError, TapLocation};

/// Returns the CGEventPost-based injector posting at `tap`.
pub fn create_event_injector(tap: TapLocation) -> Result<Box<dyn EventInjector>, PlatformError> {
    MacOSInjector::new(tap).map(|i| Box::new(i) as Box<dyn EventInjector>)
}
