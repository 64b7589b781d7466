use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{Bookmark, BookmarkPatch, NewBookmark};
use crate::db::StoreError;

#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Storage order (ascending id).
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Bookmark>, StoreError>;
    /// Single lookup filtered by both id and owner.
    async fn find_owned(&self, owner_id: i64, id: i64) -> Result<Option<Bookmark>, StoreError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Bookmark>, StoreError>;
    async fn create(&self, owner_id: i64, new: &NewBookmark) -> Result<Bookmark, StoreError>;
    /// `StoreError::NotFound` if the row is gone.
    async fn update(&self, id: i64, patch: &BookmarkPatch) -> Result<Bookmark, StoreError>;
    /// `StoreError::NotFound` if the row is gone.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgBookmarkStore {
    db: PgPool,
}

impl PgBookmarkStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookmarkStore for PgBookmarkStore {
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Bookmark>, StoreError> {
        let rows = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, title, description, link, user_id, created_at, updated_at
              FROM bookmarks
             WHERE user_id = $1
             ORDER BY id ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find_owned(&self, owner_id: i64, id: i64) -> Result<Option<Bookmark>, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, title, description, link, user_id, created_at, updated_at
              FROM bookmarks
             WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Bookmark>, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, title, description, link, user_id, created_at, updated_at
              FROM bookmarks
             WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn create(&self, owner_id: i64, new: &NewBookmark) -> Result<Bookmark, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(
            r#"
            INSERT INTO bookmarks (user_id, title, description, link)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, link, user_id, created_at, updated_at
            "#,
        )
        .bind(owner_id)
        .bind(&new.title)
        .bind(new.description.as_deref())
        .bind(&new.link)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i64, patch: &BookmarkPatch) -> Result<Bookmark, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(
            r#"
            UPDATE bookmarks
               SET title = COALESCE($2, title),
                   description = CASE WHEN $3 THEN $4 ELSE description END,
                   link = COALESCE($5, link),
                   updated_at = now()
             WHERE id = $1
            RETURNING id, title, description, link, user_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.title.as_deref())
        .bind(patch.description.is_some())
        .bind(patch.description.as_ref().and_then(|d| d.as_deref()))
        .bind(patch.link.as_deref())
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let done = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        if done.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
