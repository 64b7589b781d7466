use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::ownership::Owned;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub user_id: i64, // owner
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Owned for Bookmark {
    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

/// Caller-supplied fields for a new bookmark.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewBookmark {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

/// Partial edit. `None` keeps the stored value; `description: Some(None)`
/// clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub link: Option<String>,
}
