//! Full-screen render tests

use super::view;
use crate::test_utils::{create_test_state, test_comment, TestTerminal};
use nucamp_app::state::AppState;

fn render_screen(state: &mut AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_normal_screen_shows_card_and_comments() {
    let mut state = create_test_state();
    state.comments = vec![
        test_comment(0, 0, "Tinus Lorvaldes", "What a magnificent view!"),
        test_comment(1, 0, "Brennan Eich", "Fantastic fishing spot"),
    ];

    let term = render_screen(&mut state);

    assert!(term.line_contains(0, "React Lake Campground"));
    assert!(term.buffer_contains("Chrome Mountains"));
    assert!(term.buffer_contains("Comments"));
    assert!(term.buffer_contains("What a magnificent view!"));
    assert!(term.buffer_contains("-- Brennan Eich, Oct 25, 2018"));
    assert!(!term.buffer_contains("Add a Comment"));
}

#[test]
fn test_favorite_marker_follows_state() {
    let mut state = create_test_state();
    let term = render_screen(&mut state);
    assert!(term.buffer_contains("\u{2661}")); // ♡

    state.is_favorite = true;
    let term = render_screen(&mut state);
    assert!(term.buffer_contains("\u{2665}")); // ♥
}

#[test]
fn test_empty_campsite_shows_placeholder() {
    let mut state = create_test_state();
    let term = render_screen(&mut state);
    assert!(term.buffer_contains("No comments yet"));
}

#[test]
fn test_composer_overlays_screen() {
    let mut state = create_test_state();
    state.composer.open();

    let term = render_screen(&mut state);

    assert!(term.buffer_contains("Add a Comment"));
    assert!(term.buffer_contains("Submit"));
    // Card is still drawn beneath the dimmed overlay
    assert!(term.line_contains(0, "React Lake Campground"));
}

#[test]
fn test_view_records_comment_viewport() {
    let mut state = create_test_state();
    state.comments = vec![test_comment(0, 0, "A", "x")];
    assert_eq!(state.comment_list.visible_items, 0);

    render_screen(&mut state);

    assert!(state.comment_list.visible_items > 0);
}
