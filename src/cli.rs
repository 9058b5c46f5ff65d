//! Command-line parsing.
//!
//! ```text
//! sim click <x> <y> [duration_micros]
//! sim keystroke <keycode> [duration_micros]
//! ```
//!
//! The hold duration is resolved here, before dispatch: the CLI value when
//! present, otherwise the configured default.

use crate::config::Config;
use crate::error::SimError;
use crate::keycodes::key_name_to_vkcode;

const USAGE: &str = "Usage: sim <action> [args]";
const CLICK_USAGE: &str = "Usage: sim click <x> <y> [duration_micros]";
const KEYSTROKE_USAGE: &str = "Usage: sim keystroke <keycode> [duration_micros]";

// ---------------------------------------------------------------------------
// Parsed requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRequest {
    pub x: i64,
    pub y: i64,
    pub hold_micros: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeystrokeRequest {
    pub key_code: u16,
    pub hold_micros: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Click(ClickRequest),
    Keystroke(KeystrokeRequest),
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// The gesture selected by the first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Click,
    Keystroke,
}

impl Action {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "click" => Some(Action::Click),
            "keystroke" => Some(Action::Keystroke),
            _ => None,
        }
    }

    fn usage(self) -> &'static str {
        match self {
            Action::Click => CLICK_USAGE,
            Action::Keystroke => KEYSTROKE_USAGE,
        }
    }

    /// Whether `count` arguments after the action name are acceptable.
    fn accepts(self, count: usize) -> bool {
        match self {
            Action::Click => (2..=3).contains(&count),
            Action::Keystroke => (1..=2).contains(&count),
        }
    }
}

/// Identifies the action and checks its argument count.
///
/// Needs no configuration, so usage and unknown-action errors are reported
/// even when the config file is broken.
pub fn parse_action<S: AsRef<str>>(args: &[S]) -> Result<Action, SimError> {
    let Some(name): Option<&str> = args.first().map(AsRef::as_ref) else {
        return Err(SimError::Usage(USAGE.into()));
    };
    let action = Action::from_name(name).ok_or_else(|| SimError::UnknownAction(name.into()))?;
    if !action.accepts(args.len() - 1) {
        return Err(SimError::Usage(action.usage().into()));
    }
    Ok(action)
}

/// Parses the arguments that follow the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S], config: &Config) -> Result<Command, SimError> {
    let action = parse_action(args)?;
    let rest: Vec<&str> = args[1..].iter().map(AsRef::as_ref).collect();

    match action {
        Action::Click => parse_click(&rest, config).map(Command::Click),
        Action::Keystroke => parse_keystroke(&rest, config).map(Command::Keystroke),
    }
}

fn parse_click(args: &[&str], config: &Config) -> Result<ClickRequest, SimError> {
    let (x, y, duration) = match *args {
        [x, y] => (x, y, None),
        [x, y, duration] => (x, y, Some(duration)),
        _ => return Err(SimError::Usage(CLICK_USAGE.into())),
    };

    Ok(ClickRequest {
        x: parse_coordinate("x", x)?,
        y: parse_coordinate("y", y)?,
        hold_micros: resolve_hold(duration, config)?,
    })
}

fn parse_keystroke(args: &[&str], config: &Config) -> Result<KeystrokeRequest, SimError> {
    let (key, duration) = match *args {
        [key] => (key, None),
        [key, duration] => (key, Some(duration)),
        _ => return Err(SimError::Usage(KEYSTROKE_USAGE.into())),
    };

    let key_code = parse_key_code(key, config)
        .ok_or_else(|| SimError::ArgumentParse(format!("Invalid keycode '{key}'")))?;

    Ok(KeystrokeRequest {
        key_code,
        hold_micros: resolve_hold(duration, config)?,
    })
}

fn parse_coordinate(name: &str, raw: &str) -> Result<i64, SimError> {
    raw.parse().map_err(|_| {
        SimError::ArgumentParse(format!("Error: {name} must be an integer, got '{raw}'"))
    })
}

/// Parses the optional duration, falling back to the configured hold.
fn resolve_hold(raw: Option<&str>, config: &Config) -> Result<u64, SimError> {
    match raw {
        Some(raw) => raw.parse().map_err(|_| {
            SimError::ArgumentParse(format!(
                "Error: duration must be a non-negative number of microseconds, got '{raw}'"
            ))
        }),
        None => Ok(config.timing.hold_micros),
    }
}

/// Resolves a key argument to a virtual key code.
///
/// Accepts, in order: decimal, `0x`-prefixed hex, a `[keys]` alias, a
/// built-in key name. Numbers must be unsigned (no sign character) and fit
/// in a u16.
fn parse_key_code(raw: &str, config: &Config) -> Option<u16> {
    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        // from_str_radix tolerates a leading '+'; key codes are unsigned.
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return u16::from_str_radix(hex, 16).ok();
    }
    if raw.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') {
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        return raw.parse().ok();
    }
    config.key_alias(raw).or_else(|| key_name_to_vkcode(raw))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
