use serde::{Deserialize, Serialize};

use crate::users::repo_types::RegisteredUser;

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
}

/// Public part of a freshly registered user.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl From<RegisteredUser> for PublicUser {
    fn from(u: RegisteredUser) -> Self {
        Self {
            username: u.username,
            first_name: u.first_name,
            last_name: u.last_name,
            phone: u.phone,
        }
    }
}
