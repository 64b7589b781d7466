use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use tracing::instrument;

use super::dto::{EditUserRequest, PublicUser};
use crate::{auth::extractors::AuthUser, error::AppError, state::AppState, validation::ValidJson};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, AppError> {
    Ok(Json(state.users.me(user_id).await?))
}

#[instrument(skip(state, payload))]
pub async fn edit_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidJson(payload): ValidJson<EditUserRequest>,
) -> Result<Json<PublicUser>, AppError> {
    Ok(Json(state.users.edit(user_id, payload.into()).await?))
}
