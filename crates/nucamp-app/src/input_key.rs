//! Abstract input key event, independent of terminal library.
//!
//! `nucamp-app` never sees crossterm types; the TUI converts its key events
//! into [`InputKey`] at the boundary so the screen logic stays testable
//! without a terminal.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+s, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// Printable character carried by the key, if any
    pub fn printable(self) -> Option<char> {
        match self {
            InputKey::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}
