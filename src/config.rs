use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    /// Argon2 time cost (iterations) used when hashing new passwords.
    pub password_hash_cost: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let password_hash_cost = parse_hash_cost(std::env::var("PASSWORD_HASH_COST").ok())?;
        Ok(Self {
            database_url,
            db_max_connections,
            password_hash_cost,
        })
    }
}

fn parse_hash_cost(raw: Option<String>) -> anyhow::Result<u32> {
    let Some(raw) = raw else {
        return Ok(2);
    };
    let cost = raw
        .trim()
        .parse::<u32>()
        .with_context(|| format!("PASSWORD_HASH_COST is not a number: {raw}"))?;
    if cost == 0 {
        anyhow::bail!("PASSWORD_HASH_COST must be at least 1");
    }
    Ok(cost)
}
