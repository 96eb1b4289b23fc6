//! Campsite and comment domain types

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a campsite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampsiteId(pub u32);

impl fmt::Display for CampsiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CampsiteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(CampsiteId)
    }
}

/// Identifier of a stored comment, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u32);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Star rating on a 1-5 scale.
///
/// Out-of-range values are clamped on construction, so a `Rating` is always
/// displayable as "n of 5".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(1);
    pub const MAX: Rating = Rating(5);
    /// Rating a fresh comment draft starts with
    pub const DEFAULT: Rating = Rating(5);

    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// One star more, saturating at [`Rating::MAX`]
    pub fn increment(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One star less, saturating at [`Rating::MIN`]
    pub fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Rating {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Stars", self.0)
    }
}

/// A campsite, owned by the external data source and read-only here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campsite {
    pub id: CampsiteId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub elevation: Option<u32>,
    #[serde(default)]
    pub featured: bool,
}

/// A user review attached to one campsite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub campsite_id: CampsiteId,
    pub rating: Rating,
    pub text: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

/// Payload of a create-comment request.
///
/// The store assigns `id` and `date` when it appends the comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub author: String,
    pub rating: Rating,
    pub text: String,
    pub campsite_id: CampsiteId,
}

impl NewComment {
    /// Turn the payload into a stored comment
    pub fn into_comment(self, id: CommentId, date: DateTime<Utc>) -> Comment {
        Comment {
            id,
            campsite_id: self.campsite_id,
            rating: self.rating,
            text: self.text,
            author: self.author,
            date,
        }
    }
}
