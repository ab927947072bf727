//! User store: every account and message query the application makes.
//!
//! Functions take the repo and hasher explicitly and hold no state between
//! calls. Store and hashing failures propagate as `AppError::Database` /
//! `AppError::Internal`.

use tracing::{debug, info, warn};

use crate::auth::password::PasswordHasher;
use crate::error::AppError;
use crate::users::dto::NewUser;
use crate::users::repo::UserRepo;
use crate::users::repo_types::{
    ReceivedMessage, RegisteredUser, SentMessage, UserDetail, UserSummary,
};

/// Hash the password and insert the user with join/login times set to now.
pub async fn register(
    repo: &dyn UserRepo,
    hasher: &PasswordHasher,
    input: &NewUser,
) -> Result<RegisteredUser, AppError> {
    let hash = hasher.hash(&input.password)?;
    let user = repo.insert_user(input, &hash).await?;
    info!(username = %user.username, "user registered");
    Ok(user)
}

/// `Ok(false)` for a wrong password, but an unknown username is an
/// `Unauthorized` error rather than `false`.
pub async fn authenticate(
    repo: &dyn UserRepo,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> Result<bool, AppError> {
    let Some(hash) = repo.password_hash(username).await? else {
        warn!(%username, "authenticate unknown username");
        return Err(AppError::invalid_credentials());
    };
    let ok = hasher.verify(password, &hash)?;
    if !ok {
        warn!(%username, "authenticate wrong password");
    }
    Ok(ok)
}

pub async fn update_login_timestamp(repo: &dyn UserRepo, username: &str) -> Result<(), AppError> {
    if !repo.touch_last_login(username).await? {
        return Err(AppError::no_user(username));
    }
    debug!(%username, "last_login_at updated");
    Ok(())
}

pub async fn all(repo: &dyn UserRepo) -> Result<Vec<UserSummary>, AppError> {
    Ok(repo.list_users().await?)
}

pub async fn get(repo: &dyn UserRepo, username: &str) -> Result<UserDetail, AppError> {
    repo.find_user(username)
        .await?
        .ok_or_else(|| AppError::no_user(username))
}

/// Does not check that `username` exists; unknown users get an empty list.
pub async fn messages_from(
    repo: &dyn UserRepo,
    username: &str,
) -> Result<Vec<SentMessage>, AppError> {
    let rows = repo.messages_from(username).await?;
    Ok(rows.into_iter().map(SentMessage::from).collect())
}

pub async fn messages_to(
    repo: &dyn UserRepo,
    username: &str,
) -> Result<Vec<ReceivedMessage>, AppError> {
    let rows = repo.messages_to(username).await?;
    Ok(rows.into_iter().map(ReceivedMessage::from).collect())
}
