//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use nucamp_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete screen
///
/// Only the comment list viewport size is written back into `state`.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let icons = IconSet::new(state.settings.ui.icons);

    let card = widgets::CampsiteCard::new(&state.campsite, state.is_favorite, icons);
    let areas = layout::create(area, card.height(area.width));
    frame.render_widget(card, areas.header);

    let comment_list = widgets::CommentList::new(
        &state.comments,
        icons,
        &state.settings.ui.date_format,
    )
    .show_empty_state(state.settings.ui.show_empty_state);
    frame.render_stateful_widget(comment_list, areas.comments, &mut state.comment_list);

    if state.ui_mode() == UiMode::Composer {
        frame.render_widget(widgets::CommentComposer::new(&state.composer, icons), area);
    }
}
