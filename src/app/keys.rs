use crate::constants::{
    KEY_ALPHANUMERIC, KEY_BACKSPACE, KEY_DELETE, KEY_ENTER, KEY_NUMPAD_DIGITS, KEY_SPACE,
};

/// A key code as reported by the host's keyboard events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const ENTER: KeyCode = KeyCode(KEY_ENTER);
    pub const BACKSPACE: KeyCode = KeyCode(KEY_BACKSPACE);
    pub const DELETE: KeyCode = KeyCode(KEY_DELETE);
    pub const SPACE: KeyCode = KeyCode(KEY_SPACE);

    /// Key code of an ASCII letter or digit on the main keyboard
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        upper
            .is_ascii_alphanumeric()
            .then_some(KeyCode(upper as u32))
    }

    pub fn is_enter(&self) -> bool {
        *self == Self::ENTER
    }

    /// Keys that change the text: letters, digits, numpad digits, backspace, delete, space
    pub fn is_editing(&self) -> bool {
        KEY_ALPHANUMERIC.contains(&self.0)
            || KEY_NUMPAD_DIGITS.contains(&self.0)
            || matches!(self.0, KEY_BACKSPACE | KEY_DELETE | KEY_SPACE)
    }
}

impl From<u32> for KeyCode {
    fn from(which: u32) -> Self {
        KeyCode(which)
    }
}

/// What the host should do with the native key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Default,
    PreventDefault,
}
