//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget and full-screen tests can assert
//! on rendered text without a real terminal.

use chrono::{TimeZone, Utc};
use nucamp_app::state::AppState;
use nucamp_core::{Campsite, CampsiteId, Comment, CommentId, Rating};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Draw a frame with a custom rendering function, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        let buffer = self.buffer();
        let mut content = String::new();
        if line < buffer.area.height {
            for x in 0..buffer.area.width {
                content.push_str(buffer[(x, line)].symbol());
            }
        }
        content.contains(text)
    }

    /// All content, one terminal row per line
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        let mut result = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                result.push_str(buffer[(x, y)].symbol());
            }
            result.push('\n');
        }
        result
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

pub fn test_campsite(id: u32) -> Campsite {
    Campsite {
        id: CampsiteId(id),
        name: "React Lake Campground".to_string(),
        description: "Nestled in the foothills of the Chrome Mountains.".to_string(),
        image: None,
        elevation: Some(1233),
        featured: false,
    }
}

pub fn test_comment(id: u32, campsite_id: u32, author: &str, text: &str) -> Comment {
    Comment {
        id: CommentId(id),
        campsite_id: CampsiteId(campsite_id),
        rating: Rating::new(4),
        text: text.to_string(),
        author: author.to_string(),
        date: Utc.with_ymd_and_hms(2018, 10, 25, 16, 30, 0).unwrap(),
    }
}

/// Screen state for campsite 0 with no comments
pub fn create_test_state() -> AppState {
    AppState::new(test_campsite(0), Default::default())
}
