use std::{future::Future, sync::Arc};

use tracing::{info, warn};

use super::{
    repo::BookmarkStore,
    repo_types::{Bookmark, BookmarkPatch, NewBookmark},
};
use crate::{db::StoreError, error::AppError, ownership};

#[derive(Clone)]
pub struct BookmarkService {
    store: Arc<dyn BookmarkStore>,
}

impl BookmarkService {
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, owner_id: i64) -> Result<Vec<Bookmark>, AppError> {
        Ok(self.store.list_by_owner(owner_id).await?)
    }

    pub async fn get_by_id(&self, owner_id: i64, id: i64) -> Result<Option<Bookmark>, AppError> {
        Ok(self.store.find_owned(owner_id, id).await?)
    }

    pub async fn create(&self, owner_id: i64, new: NewBookmark) -> Result<Bookmark, AppError> {
        let bookmark = self.store.create(owner_id, &new).await?;
        info!(owner_id, bookmark_id = bookmark.id, "bookmark created");
        Ok(bookmark)
    }

    pub async fn update(
        &self,
        owner_id: i64,
        id: i64,
        patch: BookmarkPatch,
    ) -> Result<Bookmark, AppError> {
        let store = Arc::clone(&self.store);
        let updated = self
            .guarded(owner_id, id, move |b| async move {
                store.update(b.id, &patch).await.map_err(gone_is_denied)
            })
            .await?;
        info!(owner_id, bookmark_id = id, "bookmark updated");
        Ok(updated)
    }

    pub async fn delete(&self, owner_id: i64, id: i64) -> Result<(), AppError> {
        let store = Arc::clone(&self.store);
        self.guarded(owner_id, id, move |b| async move {
            store.delete(b.id).await.map_err(gone_is_denied)
        })
        .await?;
        info!(owner_id, bookmark_id = id, "bookmark deleted");
        Ok(())
    }

    /// Fetch by id alone, then hand the bookmark to `action` only if the
    /// caller owns it.
    async fn guarded<F, Fut, R>(&self, owner_id: i64, id: i64, action: F) -> Result<R, AppError>
    where
        F: FnOnce(Bookmark) -> Fut,
        Fut: Future<Output = Result<R, AppError>>,
    {
        let found = self.store.find_by_id(id).await?;
        ownership::guarded(found, owner_id, action).await.map_err(|e| {
            if matches!(e, AppError::AccessDenied) {
                warn!(owner_id, bookmark_id = id, "bookmark access denied");
            }
            e
        })
    }
}

// Row removed between the ownership check and the write.
fn gone_is_denied(e: StoreError) -> AppError {
    match e {
        StoreError::NotFound => AppError::AccessDenied,
        other => other.into(),
    }
}
