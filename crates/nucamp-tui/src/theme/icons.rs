//! Icon set for the TUI.
//!
//! Resolves glyphs at runtime based on [`IconMode`]:
//! - `IconMode::Unicode` - stars and hearts
//! - `IconMode::Ascii` - plain characters for limited terminals

use nucamp_app::config::IconMode;

#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn star_filled(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2605}", // ★
            IconMode::Ascii => "*",
        }
    }

    pub fn star_empty(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2606}", // ☆
            IconMode::Ascii => "-",
        }
    }

    pub fn heart_filled(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2665}", // ♥
            IconMode::Ascii => "<3",
        }
    }

    pub fn heart_empty(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2661}", // ♡
            IconMode::Ascii => "</3",
        }
    }

    pub fn pencil(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{270e}", // ✎
            IconMode::Ascii => "[+]",
        }
    }
}
