use async_trait::async_trait;
use sqlx::PgPool;

use crate::users::dto::NewUser;
use crate::users::repo_types::{MessageJoinRow, RegisteredUser, UserDetail, UserSummary};

/// Storage seam for users and their messages. Each method is a single
/// statement; store errors are returned untouched.
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn insert_user(
        &self,
        user: &NewUser,
        password_hash: &str,
    ) -> Result<RegisteredUser, sqlx::Error>;

    async fn password_hash(&self, username: &str) -> Result<Option<String>, sqlx::Error>;

    /// Returns `false` when no row matched.
    async fn touch_last_login(&self, username: &str) -> Result<bool, sqlx::Error>;

    async fn list_users(&self) -> Result<Vec<UserSummary>, sqlx::Error>;

    async fn find_user(&self, username: &str) -> Result<Option<UserDetail>, sqlx::Error>;

    async fn messages_from(&self, username: &str) -> Result<Vec<MessageJoinRow>, sqlx::Error>;

    async fn messages_to(&self, username: &str) -> Result<Vec<MessageJoinRow>, sqlx::Error>;
}

#[derive(Clone)]
pub struct PgUserRepo {
    db: PgPool,
}

impl PgUserRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepo for PgUserRepo {
    async fn insert_user(
        &self,
        user: &NewUser,
        password_hash: &str,
    ) -> Result<RegisteredUser, sqlx::Error> {
        sqlx::query_as::<_, RegisteredUser>(
            r#"
            INSERT INTO users (username, password, first_name, last_name, phone, join_at, last_login_at)
            VALUES ($1, $2, $3, $4, $5, current_timestamp, current_timestamp)
            RETURNING username, password, first_name, last_name, phone
            "#,
        )
        .bind(&user.username)
        .bind(password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone)
        .fetch_one(&self.db)
        .await
    }

    async fn password_hash(&self, username: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(r#"SELECT password FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(&self.db)
            .await
    }

    async fn touch_last_login(&self, username: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"UPDATE users SET last_login_at = current_timestamp WHERE username = $1"#,
        )
        .bind(username)
        .execute(&self.db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT username, first_name, last_name, phone
            FROM users
            ORDER BY username
            "#,
        )
        .fetch_all(&self.db)
        .await
    }

    async fn find_user(&self, username: &str) -> Result<Option<UserDetail>, sqlx::Error> {
        sqlx::query_as::<_, UserDetail>(
            r#"
            SELECT username, first_name, last_name, phone, join_at, last_login_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await
    }

    async fn messages_from(&self, username: &str) -> Result<Vec<MessageJoinRow>, sqlx::Error> {
        sqlx::query_as::<_, MessageJoinRow>(
            r#"
            SELECT m.id, m.body, m.sent_at, m.read_at,
                   u.username, u.first_name, u.last_name, u.phone
            FROM messages AS m
            JOIN users AS u ON u.username = m.to_username
            WHERE m.from_username = $1
            ORDER BY m.id
            "#,
        )
        .bind(username)
        .fetch_all(&self.db)
        .await
    }

    async fn messages_to(&self, username: &str) -> Result<Vec<MessageJoinRow>, sqlx::Error> {
        sqlx::query_as::<_, MessageJoinRow>(
            r#"
            SELECT m.id, m.body, m.sent_at, m.read_at,
                   u.username, u.first_name, u.last_name, u.phone
            FROM messages AS m
            JOIN users AS u ON u.username = m.from_username
            WHERE m.to_username = $1
            ORDER BY m.id
            "#,
        )
        .bind(username)
        .fetch_all(&self.db)
        .await
    }
}
