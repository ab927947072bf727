use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::{
    auth::dto::{LoginRequest, LoginResponse, PublicUser},
    error::AppError,
    state::AppState,
    users::{dto::NewUser, services},
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<(StatusCode, Json<PublicUser>), AppError> {
    let user = services::register(state.users.as_ref(), &state.hasher, &payload).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Unlike `services::authenticate`, a wrong password and an unknown
/// username both answer 401 here.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let repo = state.users.as_ref();
    if !services::authenticate(repo, &state.hasher, &payload.username, &payload.password).await? {
        return Err(AppError::invalid_credentials());
    }
    services::update_login_timestamp(repo, &payload.username).await?;
    info!(username = %payload.username, "user logged in");
    Ok(Json(LoginResponse {
        username: payload.username,
    }))
}
