use std::sync::Arc;

use tracing::{error, info, warn};

use super::dto::PublicUser;
use crate::{
    auth::{repo::UserStore, repo_types::UserPatch},
    db::StoreError,
    error::AppError,
};

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn me(&self, user_id: i64) -> Result<PublicUser, AppError> {
        match self.users.find_by_id(user_id).await? {
            Some(user) => Ok(user.into()),
            None => {
                warn!(user_id, "token subject no longer exists");
                Err(AppError::Unauthorized("User not found".into()))
            }
        }
    }

    pub async fn edit(&self, user_id: i64, patch: UserPatch) -> Result<PublicUser, AppError> {
        match self.users.update_profile(user_id, &patch).await {
            Ok(user) => {
                info!(user_id, "user profile updated");
                Ok(user.into())
            }
            Err(StoreError::Conflict) => {
                warn!(user_id, "email already registered");
                Err(AppError::CredentialsTaken)
            }
            Err(StoreError::NotFound) => Err(AppError::Unauthorized("User not found".into())),
            Err(e) => {
                error!(error = %e, user_id, "update user failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryUserStore;

    async fn seeded() -> (UserService, i64) {
        let store = Arc::new(MemoryUserStore::default());
        let id = store.create("foo@bar.com", "hash").await.unwrap().id;
        store.create("taken@bar.com", "hash").await.unwrap();
        (UserService::new(store), id)
    }

    #[tokio::test]
    async fn me_returns_caller() {
        let (svc, id) = seeded().await;
        let me = svc.me(id).await.unwrap();
        assert_eq!(me.id, id);
        assert_eq!(me.email, "foo@bar.com");
    }

    #[tokio::test]
    async fn me_for_missing_user_is_unauthorized() {
        let (svc, _) = seeded().await;
        assert!(matches!(svc.me(404).await.unwrap_err(), AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn edit_merges_profile_fields() {
        let (svc, id) = seeded().await;
        let patch = UserPatch {
            email: Some("john@example.com".into()),
            first_name: Some("John".into()),
            ..Default::default()
        };
        let user = svc.edit(id, patch).await.unwrap();
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.first_name.as_deref(), Some("John"));
        assert_eq!(user.last_name, None);
    }

    #[tokio::test]
    async fn edit_to_taken_email_is_credentials_taken() {
        let (svc, id) = seeded().await;
        let patch = UserPatch { email: Some("taken@bar.com".into()), ..Default::default() };
        assert!(matches!(svc.edit(id, patch).await.unwrap_err(), AppError::CredentialsTaken));
    }
}
