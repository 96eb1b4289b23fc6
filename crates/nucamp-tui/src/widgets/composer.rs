//! "Add a Comment" modal form

use nucamp_app::composer::{ComposerField, ComposerState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::modal_overlay::{centered_rect, dim_background, render_shadow};
use super::rating::RatingIndicator;
use crate::theme::{icons::IconSet, palette, styles};

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 15;
const CURSOR: &str = "\u{2588}"; // █

/// Keep the end of `text` that fits in `width` columns, so the cursor stays visible
fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

/// Modal comment form drawn over the whole screen while the composer is open
pub struct CommentComposer<'a> {
    composer: &'a ComposerState,
    icons: IconSet,
}

impl<'a> CommentComposer<'a> {
    pub fn new(composer: &'a ComposerState, icons: IconSet) -> Self {
        Self { composer, icons }
    }

    fn focused(&self, field: ComposerField) -> bool {
        self.composer.focus == field
    }

    fn label_style(&self, field: ComposerField) -> Style {
        if self.focused(field) {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        }
    }

    fn render_rating(&self, area: Rect, buf: &mut Buffer) {
        let rating = self.composer.draft.rating;
        let mut spans = vec![Span::styled(
            format!("{:<9}", ComposerField::Rating.label()),
            self.label_style(ComposerField::Rating),
        )];
        spans.extend(RatingIndicator::new(rating, self.icons).spans());
        spans.push(Span::styled(format!("  {}", rating), styles::text_muted()));
        if self.focused(ComposerField::Rating) {
            spans.push(Span::styled("  \u{2190}/\u{2192}", styles::key_hint()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_input(&self, field: ComposerField, value: &str, area: Rect, buf: &mut Buffer) {
        let focused = self.focused(field);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", field.label()),
                self.label_style(field),
            ))
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(if focused {
                styles::border_active()
            } else {
                styles::border_inactive()
            });
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if focused {
            let room = (inner.width as usize).saturating_sub(1);
            Line::from(vec![
                Span::styled(visible_tail(value, room).to_string(), styles::text_primary()),
                Span::styled(CURSOR, Style::default().fg(palette::ACCENT)),
            ])
        } else if value.is_empty() {
            Line::styled(field.label(), styles::text_muted().add_modifier(Modifier::ITALIC))
        } else {
            Line::styled(
                visible_tail(value, inner.width as usize).to_string(),
                styles::text_primary(),
            )
        };
        Paragraph::new(line).render(inner, buf);
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", ComposerField::Submit.label()),
                styles::button(palette::BUTTON_SUBMIT, self.focused(ComposerField::Submit)),
            ),
            Span::raw("   "),
            Span::styled(
                format!(" {} ", ComposerField::Cancel.label()),
                styles::button(palette::BUTTON_CANCEL, self.focused(ComposerField::Cancel)),
            ),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_hints(area: Rect, buf: &mut Buffer) {
        let hint = |key: &'static str, what: &'static str| {
            [
                Span::styled(key, styles::key_hint()),
                Span::styled(what, styles::text_muted()),
            ]
        };
        let spans: Vec<Span> = [
            hint("Tab", " next  "),
            hint("Enter", " select  "),
            hint("Ctrl+S", " submit  "),
            hint("Esc", " close"),
        ]
        .into_iter()
        .flatten()
        .collect();
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CommentComposer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.composer.is_visible() {
            return;
        }

        dim_background(buf, area);
        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        Clear.render(modal, buf);
        render_shadow(buf, modal);

        let block = Block::default()
            .title(Span::styled(
                " Add a Comment ",
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .bg(palette::MODAL_TITLE_BG)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(styles::border_active())
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(modal);
        block.render(modal, buf);

        let [rating, _, author, text, _, buttons, _, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .horizontal_margin(1)
        .areas(inner);

        self.render_rating(rating, buf);
        self.render_input(ComposerField::Author, &self.composer.draft.author, author, buf);
        self.render_input(ComposerField::Text, &self.composer.draft.text, text, buf);
        self.render_buttons(buttons, buf);
        Self::render_hints(hints, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nucamp_app::config::IconMode;
    use nucamp_core::Rating;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(composer: &ComposerState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                frame.render_widget(
                    CommentComposer::new(composer, IconSet::new(IconMode::Unicode)),
                    frame.area(),
                );
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_hidden_composer_draws_nothing() {
        let content = render(&ComposerState::new());
        assert!(content.trim().is_empty());
    }

    #[test]
    fn test_open_composer_shows_form_with_defaults() {
        let mut composer = ComposerState::new();
        composer.open();
        let content = render(&composer);

        assert!(content.contains("Add a Comment"));
        assert!(content.contains("★★★★★"));
        assert!(content.contains("5 Stars"));
        assert!(content.contains("Author"));
        assert!(content.contains("Comment"));
        assert!(content.contains("Submit"));
        assert!(content.contains("Cancel"));
        assert!(content.contains("Esc"));
    }

    #[test]
    fn test_draft_values_are_rendered() {
        let mut composer = ComposerState::new();
        composer.open();
        composer.set_rating(Rating::new(2));
        composer.focus = ComposerField::Author;
        composer.insert_char('J');
        composer.insert_char('o');
        let content = render(&composer);

        assert!(content.contains("★★☆☆☆"));
        assert!(content.contains("Jo█"));
    }

    #[test]
    fn test_visible_tail_keeps_end() {
        assert_eq!(visible_tail("hello", 10), "hello");
        assert_eq!(visible_tail("hello world", 5), "world");
        assert_eq!(visible_tail("", 0), "");
    }
}
