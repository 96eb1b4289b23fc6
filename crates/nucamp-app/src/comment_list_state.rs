//! Comment list state - selection and viewport tracking.
//!
//! Selection is remembered by [`CommentId`], not by position, so a comment
//! appended by the store (or removed by another collaborator) does not move
//! the highlight to a different review.

use nucamp_core::CommentId;

/// Items moved per page when the viewport height is not known yet
const DEFAULT_PAGE_SIZE: usize = 5;

/// State for comment list navigation
#[derive(Debug, Clone)]
pub struct CommentListState {
    /// Comment currently highlighted, if any
    pub selected: Option<CommentId>,
    /// Index of the first item drawn, carried between frames so the view
    /// only scrolls when the selection leaves it (set during render)
    pub offset: usize,
    /// Number of items that fit in the viewport (set during render)
    pub visible_items: usize,
}

impl Default for CommentListState {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentListState {
    pub fn new() -> Self {
        Self {
            selected: None,
            offset: 0,
            visible_items: 0,
        }
    }

    /// Position of the selected comment within `ids`.
    ///
    /// Falls back to the first item when the selected comment is gone.
    pub fn selected_index(&self, ids: &[CommentId]) -> Option<usize> {
        if ids.is_empty() {
            return None;
        }
        let found = self
            .selected
            .and_then(|sel| ids.iter().position(|id| *id == sel));
        Some(found.unwrap_or(0))
    }

    fn page_size(&self) -> usize {
        if self.visible_items == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.visible_items
        }
    }

    fn select_at(&mut self, ids: &[CommentId], index: usize) {
        self.selected = ids.get(index.min(ids.len().saturating_sub(1))).copied();
    }

    /// Move the selection down by `n` items
    pub fn select_down(&mut self, ids: &[CommentId], n: usize) {
        if let Some(current) = self.selected_index(ids) {
            self.select_at(ids, current.saturating_add(n));
        }
    }

    /// Move the selection up by `n` items
    pub fn select_up(&mut self, ids: &[CommentId], n: usize) {
        if let Some(current) = self.selected_index(ids) {
            self.select_at(ids, current.saturating_sub(n));
        }
    }

    pub fn page_down(&mut self, ids: &[CommentId]) {
        let n = self.page_size();
        self.select_down(ids, n);
    }

    pub fn page_up(&mut self, ids: &[CommentId]) {
        let n = self.page_size();
        self.select_up(ids, n);
    }

    pub fn select_first(&mut self, ids: &[CommentId]) {
        self.selected = ids.first().copied();
    }

    pub fn select_last(&mut self, ids: &[CommentId]) {
        self.selected = ids.last().copied();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<CommentId> {
        raw.iter().copied().map(CommentId).collect()
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut state = CommentListState::new();
        state.select_down(&[], 1);
        assert_eq!(state.selected_index(&[]), None);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_defaults_to_first_item() {
        let state = CommentListState::new();
        assert_eq!(state.selected_index(&ids(&[4, 7])), Some(0));
    }

    #[test]
    fn test_select_down_clamps_at_end() {
        let list = ids(&[0, 2, 5]);
        let mut state = CommentListState::new();
        state.select_down(&list, 1);
        assert_eq!(state.selected, Some(CommentId(2)));
        state.select_down(&list, 10);
        assert_eq!(state.selected, Some(CommentId(5)));
    }

    #[test]
    fn test_select_up_clamps_at_start() {
        let list = ids(&[0, 2, 5]);
        let mut state = CommentListState::new();
        state.select_last(&list);
        state.select_up(&list, 10);
        assert_eq!(state.selected, Some(CommentId(0)));
    }

    #[test]
    fn test_selection_follows_id_when_list_grows() {
        let mut state = CommentListState::new();
        state.selected = Some(CommentId(5));

        assert_eq!(state.selected_index(&ids(&[2, 5])), Some(1));
        // A comment inserted before the selection shifts its position
        assert_eq!(state.selected_index(&ids(&[1, 2, 5])), Some(2));
    }

    #[test]
    fn test_missing_selection_falls_back_to_first() {
        let mut state = CommentListState::new();
        state.selected = Some(CommentId(99));
        assert_eq!(state.selected_index(&ids(&[1, 2])), Some(0));
    }

    #[test]
    fn test_page_uses_viewport_height() {
        let list = ids(&[0, 1, 2, 3, 4, 5, 6, 7]);
        let mut state = CommentListState::new();
        state.visible_items = 3;
        state.page_down(&list);
        assert_eq!(state.selected, Some(CommentId(3)));
        state.page_up(&list);
        assert_eq!(state.selected, Some(CommentId(0)));
    }
}
