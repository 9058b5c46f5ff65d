//! In-memory injector for unit tests.
//!
//! Records every posted event with the instant it was posted, so tests can
//! assert ordering and the hold between down and up without touching the
//! desktop. `fail_on` makes construction of one specific event fail.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use super::{EventInjector, InputEvent, PlatformError, PreparedEvent};

type PostLog = Rc<RefCell<Vec<(InputEvent, Instant)>>>;

#[derive(Default)]
pub struct RecordingInjector {
    /// Events in the order they were posted.
    pub posted: PostLog,
    /// Events in the order they were constructed.
    pub created: RefCell<Vec<InputEvent>>,
    /// When set, constructing this event returns `PlatformError::EventCreation`.
    pub fail_on: Option<InputEvent>,
}

impl RecordingInjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(event: InputEvent) -> Self {
        RecordingInjector {
            fail_on: Some(event),
            ..Self::default()
        }
    }

    pub fn posted_events(&self) -> Vec<InputEvent> {
        self.posted.borrow().iter().map(|(event, _)| *event).collect()
    }

    pub fn posted_at(&self, index: usize) -> Instant {
        self.posted.borrow()[index].1
    }
}

impl EventInjector for RecordingInjector {
    fn create_event(&self, event: InputEvent) -> Result<Box<dyn PreparedEvent>, PlatformError> {
        self.created.borrow_mut().push(event);
        if self.fail_on == Some(event) {
            return Err(PlatformError::EventCreation(format!("{event:?}")));
        }
        Ok(Box::new(RecordedEvent {
            event,
            log: Rc::clone(&self.posted),
        }))
    }
}

struct RecordedEvent {
    event: InputEvent,
    log: PostLog,
}

impl PreparedEvent for RecordedEvent {
    fn event(&self) -> InputEvent {
        self.event
    }

    fn post(&self) {
        self.log.borrow_mut().push((self.event, Instant::now()));
    }
}
