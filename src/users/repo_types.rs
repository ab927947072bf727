use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Row returned by a user insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RegisteredUser {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String, // Argon2 PHC string
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserDetail {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(with = "time::serde::rfc3339")]
    pub join_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_login_at: OffsetDateTime,
}

/// Flat message row joined with the other party's profile.
#[derive(Debug, Clone, FromRow)]
pub struct MessageJoinRow {
    pub id: i32,
    pub body: String,
    pub sent_at: OffsetDateTime,
    pub read_at: Option<OffsetDateTime>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Profile of the other party on a message.
pub type MessageUser = UserSummary;

#[derive(Debug, Clone, Serialize)]
pub struct SentMessage {
    pub id: i32,
    pub to_user: MessageUser,
    pub body: String,
    #[serde(with = "time::serde::rfc3339")]
    pub sent_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub read_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceivedMessage {
    pub id: i32,
    pub from_user: MessageUser,
    pub body: String,
    #[serde(with = "time::serde::rfc3339")]
    pub sent_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub read_at: Option<OffsetDateTime>,
}

impl MessageJoinRow {
    fn split(self) -> (i32, MessageUser, String, OffsetDateTime, Option<OffsetDateTime>) {
        let user = MessageUser {
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
        };
        (self.id, user, self.body, self.sent_at, self.read_at)
    }
}

impl From<MessageJoinRow> for SentMessage {
    fn from(r: MessageJoinRow) -> Self {
        let (id, to_user, body, sent_at, read_at) = r.split();
        Self {
            id,
            to_user,
            body,
            sent_at,
            read_at,
        }
    }
}

impl From<MessageJoinRow> for ReceivedMessage {
    fn from(r: MessageJoinRow) -> Self {
        let (id, from_user, body, sent_at, read_at) = r.split();
        Self {
            id,
            from_user,
            body,
            sent_at,
            read_at,
        }
    }
}
