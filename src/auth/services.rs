use std::sync::Arc;

use tracing::{error, info, warn};

use super::{
    dto::AuthResponse,
    jwt::JwtKeys,
    password::{hash_password, verify_password},
    repo::UserStore,
    repo_types::User,
};
use crate::{db::StoreError, error::AppError};

/// Signup and signin over a user store. Holds no state of its own.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    keys: JwtKeys,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, keys: JwtKeys) -> Self {
        Self { users, keys }
    }

    pub async fn signup(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let hash = hash_password(password)?;

        let user = match self.users.create(email, &hash).await {
            Ok(u) => u,
            Err(StoreError::Conflict) => {
                warn!(%email, "email already registered");
                return Err(AppError::CredentialsTaken);
            }
            Err(e) => {
                error!(error = %e, "create user failed");
                return Err(e.into());
            }
        };

        info!(user_id = user.id, email = %user.email, "user registered");
        self.issue(&user)
    }

    pub async fn signin(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let user = match self.users.find_by_email(email).await {
            Ok(Some(u)) => u,
            Ok(None) => {
                warn!(%email, "signin unknown email");
                return Err(AppError::InvalidCredentials);
            }
            Err(e) => {
                error!(error = %e, "find_by_email failed");
                return Err(e.into());
            }
        };

        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = user.id, "signin invalid password");
            return Err(AppError::InvalidCredentials);
        }

        info!(user_id = user.id, email = %user.email, "user signed in");
        self.issue(&user)
    }

    fn issue(&self, user: &User) -> Result<AuthResponse, AppError> {
        let access_token = self.keys.sign(user.id, &user.email).map_err(|e| {
            error!(error = %e, "jwt sign failed");
            AppError::Internal(e)
        })?;
        Ok(AuthResponse { access_token })
    }
}
