use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    auth::repo_types::{User, UserPatch},
    validation::{normalize_email, Validate},
};

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EditUserRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Validate for EditUserRequest {
    fn validate(&mut self) -> Result<(), String> {
        if let Some(email) = self.email.as_mut() {
            normalize_email(email)?;
        }
        Ok(())
    }
}

impl From<EditUserRequest> for UserPatch {
    fn from(r: EditUserRequest) -> Self {
        Self {
            email: r.email,
            first_name: r.first_name,
            last_name: r.last_name,
        }
    }
}
