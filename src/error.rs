//! Crate-level error taxonomy.
//!
//! Every variant is terminal: `main` prints the `Display` text to stdout and
//! exits with `exit_code()`. The text is the exact user-facing message.

use thiserror::Error;

use crate::platform::PlatformError;

#[derive(Debug, Error)]
pub enum SimError {
    /// Wrong argument count. Carries the full usage line.
    #[error("{0}")]
    Usage(String),

    /// An argument failed to parse as its required type.
    #[error("{0}")]
    ArgumentParse(String),

    /// First argument is not a known action.
    #[error("Invalid action '{0}'. Known actions are 'click', 'keystroke'.")]
    UnknownAction(String),

    /// The OS declined to build one of the requested input events.
    #[error("Error: failed to create input event ({0})")]
    EventConstructionFailed(PlatformError),

    /// Configuration file unreadable or malformed.
    #[error("Error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// This build has no injection backend for the host OS.
    #[error("Error: {0}")]
    PlatformUnavailable(PlatformError),
}

impl SimError {
    /// Process exit status for this error. Every failure exits 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<PlatformError> for SimError {
    fn from(err: PlatformError) -> Self {
        match err {
            PlatformError::Unavailable(_) => SimError::PlatformUnavailable(err),
            PlatformError::EventSource(_) | PlatformError::EventCreation(_) => {
                SimError::EventConstructionFailed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_action_echoes_value_verbatim() {
        let err = SimError::UnknownAction("jump".into());
        assert_eq!(
            err.to_string(),
            "Invalid action 'jump'. Known actions are 'click', 'keystroke'."
        );
    }

    #[test]
    fn creation_failure_maps_to_event_construction_failed() {
        let err: SimError = PlatformError::EventCreation("mouse moved".into()).into();
        assert!(matches!(err, SimError::EventConstructionFailed(_)));
        assert!(err.to_string().starts_with("Error: failed to create input event"));
    }

    #[test]
    fn unavailable_maps_to_platform_unavailable() {
        let err: SimError = PlatformError::Unavailable("no backend".into()).into();
        assert!(matches!(err, SimError::PlatformUnavailable(_)));
    }

    #[test]
    fn every_error_exits_one() {
        let errors = [
            SimError::Usage("Usage: sim <action> [args]".into()),
            SimError::ArgumentParse("Invalid keycode 'x'".into()),
            SimError::UnknownAction("jump".into()),
            SimError::EventConstructionFailed(PlatformError::EventSource("null".into())),
            SimError::PlatformUnavailable(PlatformError::Unavailable("linux".into())),
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), 1, "{err:?}");
        }
    }
}
