//! Owner-scoped access to stored resources.
//!
//! A missing resource and a resource owned by someone else are reported
//! with the same [`AppError::AccessDenied`], so a caller can never probe
//! for ids that belong to other users.

use std::future::Future;

use crate::error::AppError;

/// A stored resource that belongs to exactly one user.
pub trait Owned {
    fn owner_id(&self) -> i64;
}

pub fn ensure_owned<T: Owned>(found: Option<T>, owner_id: i64) -> Result<T, AppError> {
    match found {
        Some(resource) if resource.owner_id() == owner_id => Ok(resource),
        _ => Err(AppError::AccessDenied),
    }
}

/// Runs `action` on the fetched resource only if `owner_id` owns it.
pub async fn guarded<T, F, Fut, R>(found: Option<T>, owner_id: i64, action: F) -> Result<R, AppError>
where
    T: Owned,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<R, AppError>>,
{
    let resource = ensure_owned(found, owner_id)?;
    action(resource).await
}
