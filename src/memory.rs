//! In-process stores backing `AppState::fake()` in tests.

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::Mutex;

use crate::{
    auth::{
        repo::UserStore,
        repo_types::{User, UserPatch},
    },
    bookmarks::{
        repo::BookmarkStore,
        repo_types::{Bookmark, BookmarkPatch, NewBookmark},
    },
    db::StoreError,
};

#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|u| u.email == email) {
            return Err(StoreError::Conflict);
        }
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: rows.last().map_or(1, |u| u.id + 1),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|u| u.id == id).cloned())
    }

    async fn update_profile(&self, id: i64, patch: &UserPatch) -> Result<User, StoreError> {
        let mut rows = self.rows.lock().await;
        if let Some(email) = &patch.email {
            if rows.iter().any(|u| u.id != id && &u.email == email) {
                return Err(StoreError::Conflict);
            }
        }
        let user = rows.iter_mut().find(|u| u.id == id).ok_or(StoreError::NotFound)?;
        if let Some(email) = &patch.email {
            user.email = email.clone();
        }
        if let Some(first_name) = &patch.first_name {
            user.first_name = Some(first_name.clone());
        }
        if let Some(last_name) = &patch.last_name {
            user.last_name = Some(last_name.clone());
        }
        user.updated_at = OffsetDateTime::now_utc();
        Ok(user.clone())
    }
}

#[derive(Default)]
pub struct MemoryBookmarkStore {
    state: Mutex<(i64, Vec<Bookmark>)>, // (last id, rows)
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Bookmark>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.1.iter().filter(|b| b.user_id == owner_id).cloned().collect())
    }

    async fn find_owned(&self, owner_id: i64, id: i64) -> Result<Option<Bookmark>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.1.iter().find(|b| b.id == id && b.user_id == owner_id).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Bookmark>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.1.iter().find(|b| b.id == id).cloned())
    }

    async fn create(&self, owner_id: i64, new: &NewBookmark) -> Result<Bookmark, StoreError> {
        let mut state = self.state.lock().await;
        state.0 += 1;
        let now = OffsetDateTime::now_utc();
        let bookmark = Bookmark {
            id: state.0,
            title: new.title.clone(),
            description: new.description.clone(),
            link: new.link.clone(),
            user_id: owner_id,
            created_at: now,
            updated_at: now,
        };
        state.1.push(bookmark.clone());
        Ok(bookmark)
    }

    async fn update(&self, id: i64, patch: &BookmarkPatch) -> Result<Bookmark, StoreError> {
        let mut state = self.state.lock().await;
        let bookmark = state.1.iter_mut().find(|b| b.id == id).ok_or(StoreError::NotFound)?;
        if let Some(title) = &patch.title {
            bookmark.title = title.clone();
        }
        if let Some(description) = &patch.description {
            bookmark.description = description.clone();
        }
        if let Some(link) = &patch.link {
            bookmark.link = link.clone();
        }
        bookmark.updated_at = OffsetDateTime::now_utc();
        Ok(bookmark.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let before = state.1.len();
        state.1.retain(|b| b.id != id);
        if state.1.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// A user store whose every call fails, for error-propagation tests.
pub struct BrokenUserStore;

#[async_trait]
impl UserStore for BrokenUserStore {
    async fn create(&self, _email: &str, _hash: &str) -> Result<User, StoreError> {
        Err(StoreError::Internal(anyhow::anyhow!("connection reset")))
    }
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(StoreError::Internal(anyhow::anyhow!("connection reset")))
    }
    async fn find_by_id(&self, _id: i64) -> Result<Option<User>, StoreError> {
        Err(StoreError::Internal(anyhow::anyhow!("connection reset")))
    }
    async fn update_profile(&self, _id: i64, _patch: &UserPatch) -> Result<User, StoreError> {
        Err(StoreError::Internal(anyhow::anyhow!("connection reset")))
    }
}

/// A bookmark store whose every call fails, for error-propagation tests.
pub struct BrokenBookmarkStore;

#[async_trait]
impl BookmarkStore for BrokenBookmarkStore {
    async fn list_by_owner(&self, _owner_id: i64) -> Result<Vec<Bookmark>, StoreError> {
        Err(StoreError::Internal(anyhow::anyhow!("connection reset")))
    }
    async fn find_owned(&self, _owner_id: i64, _id: i64) -> Result<Option<Bookmark>, StoreError> {
        Err(StoreError::Internal(anyhow::anyhow!("connection reset")))
    }
    async fn find_by_id(&self, _id: i64) -> Result<Option<Bookmark>, StoreError> {
        Err(StoreError::Internal(anyhow::anyhow!("connection reset")))
    }
    async fn create(&self, _owner_id: i64, _new: &NewBookmark) -> Result<Bookmark, StoreError> {
        Err(StoreError::Internal(anyhow::anyhow!("connection reset")))
    }
    async fn update(&self, _id: i64, _patch: &BookmarkPatch) -> Result<Bookmark, StoreError> {
        Err(StoreError::Internal(anyhow::anyhow!("connection reset")))
    }
    async fn delete(&self, _id: i64) -> Result<(), StoreError> {
        Err(StoreError::Internal(anyhow::anyhow!("connection reset")))
    }
}
