use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::AppError,
    state::AppState,
    users::{
        dto::{ReceivedMessagesResponse, SentMessagesResponse, UserListResponse, UserResponse},
        services,
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:username", get(get_user))
        .route("/users/:username/to", get(get_messages_to))
        .route("/users/:username/from", get(get_messages_from))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UserListResponse>, AppError> {
    let users = services::all(state.users.as_ref()).await?;
    Ok(Json(UserListResponse { users }))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = services::get(state.users.as_ref(), &username).await?;
    Ok(Json(UserResponse { user }))
}

#[instrument(skip(state))]
pub async fn get_messages_to(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ReceivedMessagesResponse>, AppError> {
    let messages = services::messages_to(state.users.as_ref(), &username).await?;
    Ok(Json(ReceivedMessagesResponse { messages }))
}

#[instrument(skip(state))]
pub async fn get_messages_from(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<SentMessagesResponse>, AppError> {
    let messages = services::messages_from(state.users.as_ref(), &username).await?;
    Ok(Json(SentMessagesResponse { messages }))
}
