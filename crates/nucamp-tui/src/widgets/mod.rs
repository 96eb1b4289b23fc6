//! Custom widget components

mod campsite_card;
mod comment_list;
mod composer;
pub mod modal_overlay;
mod rating;

pub use campsite_card::CampsiteCard;
pub use comment_list::{format_date, wrap_text, CommentList};
pub use composer::CommentComposer;
pub use rating::RatingIndicator;

// Re-export state types from app layer (these are used by render/)
pub use nucamp_app::comment_list_state::CommentListState;
