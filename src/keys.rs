//! Key code tables: the ignored set and the name resolver
//!
//! Key codes are opaque `u8` identifiers in the 0-255 range. A small fixed
//! set of codes (mouse buttons and OS/meta keys) is permanently excluded
//! from polling. Codes with no canonical name resolve to `None`, which
//! tells the listener to suppress the event entirely — a filtering policy,
//! not an error.

/// Raw key code in the 0-255 domain
pub type KeyCode = u8;

/// Codes that are never polled: mouse buttons and OS/meta keys.
const IGNORED_KEYS: [KeyCode; 7] = [0x01, 0x02, 0x04, 0x05, 0x06, 0x5B, 0x5C];

/// Returns `true` if the code belongs to the permanently ignored set
pub fn is_ignored(code: KeyCode) -> bool {
    IGNORED_KEYS.contains(&code)
}

/// Resolves a key code to its canonical human-readable name
///
/// Control/navigation keys map to fixed uppercase names, digits and
/// uppercase letters map to their single-character string, and every other
/// code resolves to `None`.
///
/// # Example
///
/// ```rust
/// use virtual_input::keys::resolve;
///
/// assert_eq!(resolve(0x0D).as_deref(), Some("ENTER"));
/// assert_eq!(resolve(0x41).as_deref(), Some("A"));
/// assert_eq!(resolve(0x07), None);
/// ```
pub fn resolve(code: KeyCode) -> Option<String> {
    if let Some(name) = special_name(code) {
        return Some(name.to_string());
    }

    match code {
        // Digits '0'-'9' and uppercase letters 'A'-'Z'
        0x30..=0x39 | 0x41..=0x5A => Some((code as char).to_string()),
        _ => None,
    }
}

fn special_name(code: KeyCode) -> Option<&'static str> {
    match code {
        0x08 => Some("BACKSPACE"),
        0x09 => Some("TAB"),
        0x0D => Some("ENTER"),
        0x10 => Some("SHIFT"),
        0x11 => Some("CTRL"),
        0x12 => Some("ALT"),
        0x13 => Some("PAUSE"),
        0x14 => Some("CAPSLOCK"),
        0x1B => Some("ESC"),
        0x20 => Some("SPACE"),
        0x21 => Some("PAGEUP"),
        0x22 => Some("PAGEDOWN"),
        0x23 => Some("END"),
        0x24 => Some("HOME"),
        0x25 => Some("LEFT"),
        0x26 => Some("UP"),
        0x27 => Some("RIGHT"),
        0x28 => Some("DOWN"),
        0x2C => Some("PRINTSCREEN"),
        0x2D => Some("INSERT"),
        0x2E => Some("DELETE"),
        0x90 => Some("NUMLOCK"),
        0x91 => Some("SCROLLLOCK"),
        _ => None,
    }
}
