//! Comment selection for the active campsite

use nucamp_core::{CampsiteId, Comment};

/// Comments belonging to `campsite_id`, in the order the store holds them.
///
/// The iterator is lazy and cheap to clone, so a caller can walk it more
/// than once (count first, render second) without collecting.
pub fn visible_comments(
    comments: &[Comment],
    campsite_id: CampsiteId,
) -> impl Iterator<Item = &Comment> + Clone + '_ {
    comments
        .iter()
        .filter(move |comment| comment.campsite_id == campsite_id)
}
