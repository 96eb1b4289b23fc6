//! Comment list navigation handlers

use crate::handler::UpdateResult;
use crate::state::AppState;

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    let ids = state.comment_ids();
    state.comment_list.select_up(&ids, 1);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    let ids = state.comment_ids();
    state.comment_list.select_down(&ids, 1);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    let ids = state.comment_ids();
    state.comment_list.page_up(&ids);
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    let ids = state.comment_ids();
    state.comment_list.page_down(&ids);
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    let ids = state.comment_ids();
    state.comment_list.select_first(&ids);
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    let ids = state.comment_ids();
    state.comment_list.select_last(&ids);
    UpdateResult::none()
}
