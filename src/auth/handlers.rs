use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    auth::dto::{AuthRequest, AuthResponse},
    error::AppError,
    state::AppState,
    validation::ValidJson,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<AuthRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let res = state.auth.signup(&payload.email, &payload.password).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<AuthRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let res = state.auth.signin(&payload.email, &payload.password).await?;
    Ok(Json(res))
}
