use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::users::dto::NewUser;
use crate::users::repo::UserRepo;
use crate::users::repo_types::{MessageJoinRow, RegisteredUser, UserDetail, UserSummary};

#[derive(Debug, Clone)]
struct StoredUser {
    username: String,
    password: String,
    first_name: String,
    last_name: String,
    phone: String,
    join_at: OffsetDateTime,
    last_login_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
struct StoredMessage {
    id: i32,
    from_username: String,
    to_username: String,
    body: String,
    sent_at: OffsetDateTime,
    read_at: Option<OffsetDateTime>,
}

#[derive(Default)]
struct Tables {
    users: Vec<StoredUser>,
    messages: Vec<StoredMessage>,
}

/// In-memory `UserRepo` with the same constraints the schema enforces.
#[derive(Default)]
pub struct MemoryUserRepo {
    tables: Mutex<Tables>,
}

impl MemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages are written by another component in production; tests seed
    /// them here. Returns `None` when either user is missing.
    pub fn add_message(&self, from: &str, to: &str, body: &str) -> Option<i32> {
        let mut t = self.tables.lock().unwrap();
        let known = |name: &str| t.users.iter().any(|u| u.username == name);
        if !known(from) || !known(to) {
            return None;
        }
        let id = t.messages.len() as i32 + 1;
        t.messages.push(StoredMessage {
            id,
            from_username: from.into(),
            to_username: to.into(),
            body: body.into(),
            sent_at: OffsetDateTime::now_utc(),
            read_at: None,
        });
        Some(id)
    }

    pub fn mark_read(&self, id: i32) {
        let mut t = self.tables.lock().unwrap();
        if let Some(m) = t.messages.iter_mut().find(|m| m.id == id) {
            m.read_at = Some(OffsetDateTime::now_utc());
        }
    }

    fn joined(&self, pick: impl Fn(&StoredMessage) -> Option<&str>) -> Vec<MessageJoinRow> {
        let t = self.tables.lock().unwrap();
        t.messages
            .iter()
            .filter_map(|m| {
                let other = pick(m)?;
                let u = t.users.iter().find(|u| u.username == other)?;
                Some(MessageJoinRow {
                    id: m.id,
                    body: m.body.clone(),
                    sent_at: m.sent_at,
                    read_at: m.read_at,
                    username: u.username.clone(),
                    first_name: u.first_name.clone(),
                    last_name: u.last_name.clone(),
                    phone: u.phone.clone(),
                })
            })
            .collect()
    }
}

#[async_trait]
impl UserRepo for MemoryUserRepo {
    async fn insert_user(
        &self,
        user: &NewUser,
        password_hash: &str,
    ) -> Result<RegisteredUser, sqlx::Error> {
        let mut t = self.tables.lock().unwrap();
        if t.users.iter().any(|u| u.username == user.username) {
            return Err(sqlx::Error::Protocol(format!(
                "duplicate key value violates unique constraint \"users_pkey\": {}",
                user.username
            )));
        }
        let now = OffsetDateTime::now_utc();
        t.users.push(StoredUser {
            username: user.username.clone(),
            password: password_hash.into(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            join_at: now,
            last_login_at: now,
        });
        Ok(RegisteredUser {
            username: user.username.clone(),
            password: password_hash.into(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
        })
    }

    async fn password_hash(&self, username: &str) -> Result<Option<String>, sqlx::Error> {
        let t = self.tables.lock().unwrap();
        Ok(t.users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.password.clone()))
    }

    async fn touch_last_login(&self, username: &str) -> Result<bool, sqlx::Error> {
        let mut t = self.tables.lock().unwrap();
        match t.users.iter_mut().find(|u| u.username == username) {
            Some(u) => {
                u.last_login_at = OffsetDateTime::now_utc();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, sqlx::Error> {
        let t = self.tables.lock().unwrap();
        let mut users: Vec<UserSummary> = t
            .users
            .iter()
            .map(|u| UserSummary {
                username: u.username.clone(),
                first_name: u.first_name.clone(),
                last_name: u.last_name.clone(),
                phone: u.phone.clone(),
            })
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn find_user(&self, username: &str) -> Result<Option<UserDetail>, sqlx::Error> {
        let t = self.tables.lock().unwrap();
        Ok(t.users
            .iter()
            .find(|u| u.username == username)
            .map(|u| UserDetail {
                username: u.username.clone(),
                first_name: u.first_name.clone(),
                last_name: u.last_name.clone(),
                phone: u.phone.clone(),
                join_at: u.join_at,
                last_login_at: u.last_login_at,
            }))
    }

    async fn messages_from(&self, username: &str) -> Result<Vec<MessageJoinRow>, sqlx::Error> {
        Ok(self.joined(|m| (m.from_username == username).then_some(m.to_username.as_str())))
    }

    async fn messages_to(&self, username: &str) -> Result<Vec<MessageJoinRow>, sqlx::Error> {
        Ok(self.joined(|m| (m.to_username == username).then_some(m.from_username.as_str())))
    }
}
