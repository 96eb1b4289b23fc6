//! Read-only star rating indicator

use nucamp_core::Rating;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{icons::IconSet, palette};

/// Renders `n of 5` stars. It has no input handling of its own; changing a
/// rating is only possible through the comment form.
#[derive(Debug, Clone, Copy)]
pub struct RatingIndicator {
    rating: Rating,
    icons: IconSet,
}

impl RatingIndicator {
    pub fn new(rating: Rating, icons: IconSet) -> Self {
        Self { rating, icons }
    }

    /// Star spans, filled first
    pub fn spans(&self) -> Vec<Span<'static>> {
        let filled = self.rating.value();
        (Rating::MIN.value()..=Rating::MAX.value())
            .map(|n| {
                if n <= filled {
                    Span::styled(
                        self.icons.star_filled(),
                        Style::default().fg(palette::STAR_FILLED),
                    )
                } else {
                    Span::styled(
                        self.icons.star_empty(),
                        Style::default().fg(palette::STAR_EMPTY),
                    )
                }
            })
            .collect()
    }

    /// Stars as plain text, e.g. "★★★☆☆"
    pub fn text(&self) -> String {
        self.spans().iter().map(|s| s.content.as_ref()).collect()
    }
}

impl Widget for RatingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(self.spans()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use nucamp_app::config::IconMode;

    #[test]
    fn test_three_of_five() {
        let indicator = RatingIndicator::new(Rating::new(3), IconSet::new(IconMode::Unicode));
        assert_snapshot!(indicator.text(), @"★★★☆☆");
    }

    #[test]
    fn test_ascii_indicator() {
        let indicator = RatingIndicator::new(Rating::new(3), IconSet::new(IconMode::Ascii));
        assert_eq!(indicator.text(), "***--");
    }

    #[test]
    fn test_bounds() {
        let icons = IconSet::new(IconMode::Ascii);
        assert_eq!(RatingIndicator::new(Rating::MIN, icons).text(), "*----");
        assert_eq!(RatingIndicator::new(Rating::MAX, icons).text(), "*****");
    }

    #[test]
    fn test_renders_into_buffer() {
        let area = Rect::new(0, 0, 5, 1);
        let mut buf = Buffer::empty(area);
        RatingIndicator::new(Rating::new(2), IconSet::new(IconMode::Ascii)).render(area, &mut buf);

        let row: String = (0..5).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert_eq!(row, "**---");
    }
}
