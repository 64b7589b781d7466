use serde::{Deserialize, Deserializer};

use super::repo_types::{BookmarkPatch, NewBookmark};
use crate::validation::{require_non_empty, Validate};

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub link: String,
}

impl Validate for CreateBookmarkRequest {
    fn validate(&mut self) -> Result<(), String> {
        require_non_empty("title", &self.title)?;
        require_non_empty("link", &self.link)
    }
}

impl From<CreateBookmarkRequest> for NewBookmark {
    fn from(r: CreateBookmarkRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            link: r.link,
        }
    }
}

// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn nullable<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[derive(Debug, Default, Deserialize)]
pub struct EditBookmarkRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub link: Option<String>,
}

impl Validate for EditBookmarkRequest {
    fn validate(&mut self) -> Result<(), String> {
        if let Some(title) = &self.title {
            require_non_empty("title", title)?;
        }
        if let Some(link) = &self.link {
            require_non_empty("link", link)?;
        }
        Ok(())
    }
}

impl From<EditBookmarkRequest> for BookmarkPatch {
    fn from(r: EditBookmarkRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            link: r.link,
        }
    }
}
