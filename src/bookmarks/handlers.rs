use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{CreateBookmarkRequest, EditBookmarkRequest},
    repo_types::Bookmark,
};
use crate::{
    auth::extractors::AuthUser,
    error::AppError,
    state::AppState,
    validation::{ValidJson, ValidPath},
};

pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/:id",
            get(get_bookmark).patch(edit_bookmark).delete(delete_bookmark),
        )
}

#[instrument(skip(state))]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Bookmark>>, AppError> {
    Ok(Json(state.bookmarks.list(user_id).await?))
}

#[instrument(skip(state))]
pub async fn get_bookmark(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidPath(id): ValidPath<i64>,
) -> Result<Json<Bookmark>, AppError> {
    state
        .bookmarks
        .get_by_id(user_id, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Bookmark not found".into()))
}

#[instrument(skip(state, payload))]
pub async fn create_bookmark(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidJson(payload): ValidJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, HeaderMap, Json<Bookmark>), AppError> {
    let bookmark = state.bookmarks.create(user_id, payload.into()).await?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/bookmarks/{}", bookmark.id)) {
        headers.insert(header::LOCATION, location);
    }
    Ok((StatusCode::CREATED, headers, Json(bookmark)))
}

#[instrument(skip(state, payload))]
pub async fn edit_bookmark(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidPath(id): ValidPath<i64>,
    ValidJson(payload): ValidJson<EditBookmarkRequest>,
) -> Result<Json<Bookmark>, AppError> {
    Ok(Json(state.bookmarks.update(user_id, id, payload.into()).await?))
}

#[instrument(skip(state))]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ValidPath(id): ValidPath<i64>,
) -> Result<StatusCode, AppError> {
    state.bookmarks.delete(user_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
