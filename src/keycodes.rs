//! Key name -> macOS virtual key code (CGKeyCode, u16) lookup.
//!
//! Key codes are physical key positions per Apple HIToolbox/Events.h.
//! They are layout-independent: names describe the ANSI keyboard legend, so
//! on a Dvorak layout `q` still presses the key that types `'`.
//!
//! Modifier names inject the left-hand variant; the right-hand variants have
//! their own `right*` names.

/// Name/code pairs. Lookups are case-insensitive; several names may share a
/// code (`return`/`enter`).
const KEY_NAMES: &[(&str, u16)] = &[
    // Letters
    ("a", 0x00),
    ("b", 0x0B),
    ("c", 0x08),
    ("d", 0x02),
    ("e", 0x0E),
    ("f", 0x03),
    ("g", 0x05),
    ("h", 0x04),
    ("i", 0x22),
    ("j", 0x26),
    ("k", 0x28),
    ("l", 0x25),
    ("m", 0x2E),
    ("n", 0x2D),
    ("o", 0x1F),
    ("p", 0x23),
    ("q", 0x0C),
    ("r", 0x0F),
    ("s", 0x01),
    ("t", 0x11),
    ("u", 0x20),
    ("v", 0x09),
    ("w", 0x0D),
    ("x", 0x07),
    ("y", 0x10),
    ("z", 0x06),
    // Top-row digits. Bare digits parse as key codes, so these need a prefix.
    ("key0", 0x1D),
    ("key1", 0x12),
    ("key2", 0x13),
    ("key3", 0x14),
    ("key4", 0x15),
    ("key5", 0x17),
    ("key6", 0x16),
    ("key7", 0x1A),
    ("key8", 0x1C),
    ("key9", 0x19),
    // Function keys
    ("f1", 0x7A),
    ("f2", 0x78),
    ("f3", 0x63),
    ("f4", 0x76),
    ("f5", 0x60),
    ("f6", 0x61),
    ("f7", 0x62),
    ("f8", 0x64),
    ("f9", 0x65),
    ("f10", 0x6D),
    ("f11", 0x67),
    ("f12", 0x6F),
    ("f13", 0x69),
    ("f14", 0x6B),
    ("f15", 0x71),
    ("f16", 0x6A),
    ("f17", 0x40),
    ("f18", 0x4F),
    ("f19", 0x50),
    ("f20", 0x5A),
    // Modifiers
    ("control", 0x3B),
    ("ctrl", 0x3B),
    ("shift", 0x38),
    ("option", 0x3A),
    ("alt", 0x3A),
    ("command", 0x37),
    ("cmd", 0x37),
    ("rightcontrol", 0x3E),
    ("rightshift", 0x3C),
    ("rightoption", 0x3D),
    ("rightcommand", 0x36),
    ("function", 0x3F),
    ("capslock", 0x39),
    // Navigation and editing
    ("space", 0x31),
    ("return", 0x24),
    ("enter", 0x24),
    ("tab", 0x30),
    ("escape", 0x35),
    ("esc", 0x35),
    ("delete", 0x33), // kVK_Delete (Backspace on PC)
    ("backspace", 0x33),
    ("forwarddelete", 0x75),
    ("help", 0x72),
    ("home", 0x73),
    ("end", 0x77),
    ("pageup", 0x74),
    ("pagedown", 0x79),
    ("up", 0x7E),
    ("down", 0x7D),
    ("left", 0x7B),
    ("right", 0x7C),
    // Numeric keypad
    ("keypad0", 0x52),
    ("keypad1", 0x53),
    ("keypad2", 0x54),
    ("keypad3", 0x55),
    ("keypad4", 0x56),
    ("keypad5", 0x57),
    ("keypad6", 0x58),
    ("keypad7", 0x59),
    ("keypad8", 0x5B),
    ("keypad9", 0x5C),
    ("keypadplus", 0x45),
    ("keypadminus", 0x4E),
    ("keypadmultiply", 0x43),
    ("keypaddivide", 0x4B),
    ("keypadenter", 0x4C),
    ("keypaddecimal", 0x41),
    ("keypadequals", 0x51),
    ("keypadclear", 0x47),
    // Punctuation / symbol keys
    ("grave", 0x32),
    ("minus", 0x1B),
    ("equal", 0x18),
    ("leftbracket", 0x21),
    ("rightbracket", 0x1E),
    ("backslash", 0x2A),
    ("semicolon", 0x29),
    ("quote", 0x27),
    ("comma", 0x2B),
    ("period", 0x2F),
    ("slash", 0x2C),
];

/// Returns the virtual key code for a key name, ignoring ASCII case.
///
/// Returns `None` for names not in the table.
pub fn key_name_to_vkcode(name: &str) -> Option<u16> {
    KEY_NAMES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, code)| code)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_check_letter_codes() {
        assert_eq!(key_name_to_vkcode("a"), Some(0x00));
        assert_eq!(key_name_to_vkcode("b"), Some(0x0B));
        assert_eq!(key_name_to_vkcode("z"), Some(0x06));
    }

    #[test]
    fn spot_check_navigation_keys() {
        assert_eq!(key_name_to_vkcode("return"), Some(36));
        assert_eq!(key_name_to_vkcode("up"), Some(0x7E));
        assert_eq!(key_name_to_vkcode("left"), Some(0x7B));
        assert_eq!(key_name_to_vkcode("forwarddelete"), Some(0x75));
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(key_name_to_vkcode("Return"), Some(36));
        assert_eq!(key_name_to_vkcode("F12"), Some(0x6F));
        assert_eq!(key_name_to_vkcode("CMD"), Some(0x37));
    }

    #[test]
    fn synonyms_share_a_code() {
        assert_eq!(key_name_to_vkcode("return"), key_name_to_vkcode("enter"));
        assert_eq!(key_name_to_vkcode("option"), key_name_to_vkcode("alt"));
        assert_eq!(key_name_to_vkcode("delete"), key_name_to_vkcode("backspace"));
    }

    #[test]
    fn right_modifiers_differ_from_left() {
        assert_ne!(
            key_name_to_vkcode("shift"),
            key_name_to_vkcode("rightshift")
        );
        assert_eq!(key_name_to_vkcode("rightcommand"), Some(0x36));
    }

    #[test]
    fn unknown_name_returns_none() {
        assert_eq!(key_name_to_vkcode("hyper"), None);
        assert_eq!(key_name_to_vkcode(""), None);
    }

    #[test]
    fn names_are_unique() {
        for (i, (name, _)) in KEY_NAMES.iter().enumerate() {
            assert!(
                KEY_NAMES[i + 1..].iter().all(|(other, _)| other != name),
                "duplicate key name {name:?}"
            );
        }
    }
}
