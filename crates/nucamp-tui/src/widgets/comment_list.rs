//! Comment list for the active campsite

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use nucamp_app::comment_list_state::CommentListState;
use nucamp_core::{Comment, CommentId};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::rating::RatingIndicator;
use crate::theme::{icons::IconSet, palette, styles};

/// Rows per comment besides the body: stars, attribution, spacer
const ITEM_CHROME_ROWS: usize = 3;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a comment date, falling back to ISO dates for a bad format string
pub fn format_date(date: &DateTime<Utc>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", date.format(FALLBACK_DATE_FORMAT));
    }
    out
}

/// Word-wrap `text` into lines of at most `width` columns.
///
/// Words wider than a line are broken between characters. Explicit newlines
/// start a new line. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width > width {
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if line_width > 0 && line_width + w > width {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(c);
                    line_width += w;
                }
                continue;
            }

            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }
        lines.push(line);
    }

    lines
}

/// How many items, starting from the first of `heights`, fit in `rows`
fn items_fitting(heights: &[usize], rows: usize) -> usize {
    let mut used = 0;
    let mut count = 0;
    for height in heights {
        used += height;
        if used > rows {
            break;
        }
        count += 1;
    }
    count.max(1)
}

/// Cut `text` to at most `max_width` terminal columns, marking the cut with `…`
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Comments rendered in store order, keyed by [`CommentId`].
pub struct CommentList<'a> {
    comments: &'a [Comment],
    icons: IconSet,
    date_format: &'a str,
    show_empty_state: bool,
}

impl<'a> CommentList<'a> {
    pub fn new(comments: &'a [Comment], icons: IconSet, date_format: &'a str) -> Self {
        Self {
            comments,
            icons,
            date_format,
            show_empty_state: true,
        }
    }

    pub fn show_empty_state(mut self, show: bool) -> Self {
        self.show_empty_state = show;
        self
    }

    fn item(&self, comment: &Comment, width: usize) -> ListItem<'static> {
        let attribution = format!(
            "-- {}, {}",
            comment.author,
            format_date(&comment.date, self.date_format)
        );
        let mut lines: Vec<Line<'static>> = wrap_text(&comment.text, width)
            .into_iter()
            .map(|body| Line::styled(body, styles::text_primary()))
            .collect();
        lines.reserve(ITEM_CHROME_ROWS);
        lines.push(Line::from(
            RatingIndicator::new(comment.rating, self.icons).spans(),
        ));
        lines.push(Line::styled(
            truncate_to_width(&attribution, width),
            styles::text_muted(),
        ));
        lines.push(Line::default());
        ListItem::new(lines)
    }
}

impl StatefulWidget for CommentList<'_> {
    type State = CommentListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .title(Line::from(Span::styled(
                " Comments ",
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .bg(palette::COMMENTS_TITLE)
                    .add_modifier(Modifier::BOLD),
            )))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(styles::border_inactive());

        let inner = block.inner(area);
        block.render(area, buf);

        if self.comments.is_empty() {
            state.offset = 0;
            state.visible_items = 0;
            if self.show_empty_state {
                Paragraph::new(Line::styled("No comments yet", styles::text_muted()))
                    .alignment(Alignment::Center)
                    .render(inner, buf);
            }
            return;
        }

        let ids: Vec<CommentId> = self.comments.iter().map(|c| c.id).collect();
        let width = inner.width as usize;
        let items: Vec<ListItem> = self
            .comments
            .iter()
            .map(|comment| self.item(comment, width))
            .collect();

        let heights: Vec<usize> = items.iter().map(ListItem::height).collect();

        let mut list_state = ListState::default()
            .with_selected(state.selected_index(&ids))
            .with_offset(state.offset.min(ids.len() - 1));
        let list = List::new(items).highlight_style(Style::default().bg(palette::SELECTED_BG));
        StatefulWidget::render(list, inner, buf, &mut list_state);

        state.offset = list_state.offset();
        state.visible_items = items_fitting(
            heights.get(state.offset..).unwrap_or_default(),
            inner.height as usize,
        );
    }
}
