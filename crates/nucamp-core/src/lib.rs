//! # nucamp-core - Core Domain Types
//!
//! Foundation crate for nucamp. Provides the campsite and comment domain
//! types, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Campsite`] - A campsite as supplied by the navigation layer
//! - [`Comment`] - A stored review attached to one campsite
//! - [`NewComment`] - Creation payload for a comment (no id, no date yet)
//! - [`Rating`] - A 1-5 star rating, clamped on construction
//! - [`CampsiteId`], [`CommentId`] - Typed identifiers
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use nucamp_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all nucamp crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{Campsite, CampsiteId, Comment, CommentId, NewComment, Rating};
