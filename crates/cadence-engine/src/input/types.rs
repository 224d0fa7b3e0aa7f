/// Keyboard key identifier, by physical position.
///
/// Only the keys a frame-loop host binds commands to are named. Everything else
/// maps to `Key::Unknown` with the platform's numeric code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,

    /// Letter key, stored lowercase (`'a'..='z'`).
    Letter(char),

    /// Top-row digit key, `0..=9`.
    Digit(u8),

    /// Function key, `1..=12`.
    Function(u8),

    Unknown(u32),
}

impl Key {
    /// Letter key for `c`, case-insensitive. `None` for non-ASCII-letters.
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Key::Letter(c.to_ascii_lowercase()))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Focused(bool),

    Key {
        key: Key,
        state: KeyState,
        /// Auto-repeat from a held key.
        repeat: bool,
    },
}
