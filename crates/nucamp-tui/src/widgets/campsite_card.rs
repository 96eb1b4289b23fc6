//! Campsite detail header

use nucamp_core::Campsite;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, palette, styles};

/// Campsite summary with the favorite marker and the two header actions.
///
/// Pure function of its inputs; the actions themselves are key bindings
/// handled by the app layer.
pub struct CampsiteCard<'a> {
    campsite: &'a Campsite,
    is_favorite: bool,
    icons: IconSet,
}

impl<'a> CampsiteCard<'a> {
    pub fn new(campsite: &'a Campsite, is_favorite: bool, icons: IconSet) -> Self {
        Self {
            campsite,
            is_favorite,
            icons,
        }
    }

    fn title(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            format!(" {} ", self.campsite.name),
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )];
        if self.campsite.featured {
            spans.push(Span::styled("featured ", styles::text_muted()));
        }
        Line::from(spans)
    }

    fn actions_line(&self) -> Line<'static> {
        let heart = if self.is_favorite {
            Span::styled(
                self.icons.heart_filled(),
                Style::default().fg(palette::FAVORITE),
            )
        } else {
            Span::styled(
                self.icons.heart_empty(),
                Style::default().fg(palette::FAVORITE),
            )
        };

        let mut spans = Vec::new();
        if let Some(elevation) = self.campsite.elevation {
            spans.push(Span::styled(
                format!("Elevation {} ft", elevation),
                styles::text_secondary(),
            ));
            spans.push(Span::raw("   "));
        }
        spans.extend([
            heart,
            Span::raw(" "),
            Span::styled("f", styles::key_hint()),
            Span::styled(" favorite   ", styles::text_muted()),
            Span::styled(self.icons.pencil(), styles::accent_bold()),
            Span::raw(" "),
            Span::styled("c", styles::key_hint()),
            Span::styled(" comment", styles::text_muted()),
        ]);
        Line::from(spans)
    }
}

impl<'a> CampsiteCard<'a> {
    /// Rows the card needs at `width`, borders included, wrapped exactly as
    /// it will be drawn
    pub fn height(&self, width: u16) -> u16 {
        let rows = self.paragraph().line_count(width);
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    fn paragraph(&self) -> Paragraph<'a> {
        let block = Block::default()
            .title(self.title())
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .border_style(styles::border_inactive())
            .style(Style::default().bg(palette::CARD_BG));

        let mut lines = Vec::new();
        if !self.campsite.description.is_empty() {
            lines.push(Line::styled(
                self.campsite.description.clone(),
                styles::text_primary(),
            ));
            lines.push(Line::default());
        }
        lines.push(self.actions_line());

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
    }
}

impl Widget for CampsiteCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.paragraph().render(area, buf);
    }
}
