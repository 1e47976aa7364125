//! Keystroke representation for the editing surface

use serde::{Deserialize, Serialize};

/// A single keystroke delivered by the host editing surface.
///
/// The shell is modeless; printable characters insert at the caret and the
/// rest are editing or navigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Printable character
    Char(char),

    // Editing
    Enter,
    Backspace,
    Tab,

    // Navigation
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl Key {
    /// Translates an ASCII byte into a keystroke, for hosts that deliver
    /// raw bytes.
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'\r' | b'\n' => Some(Key::Enter),
            0x08 | 0x7F => Some(Key::Backspace),
            b'\t' => Some(Key::Tab),
            ch if (0x20..0x7F).contains(&ch) => Some(Key::Char(ch as char)),
            _ => None,
        }
    }
}
