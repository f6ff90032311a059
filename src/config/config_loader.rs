use anyhow::{Context, Result};
use std::str::FromStr;

use super::config_model::{Database, DotEnvyConfig, Server};

pub const DEFAULT_MAX_POOL_SIZE: u32 = 10;

/// Reads the process environment. Callers load `.env` first with `dotenvy::dotenv()`.
pub fn load() -> Result<DotEnvyConfig> {
    let server = Server {
        port: required("SERVER_PORT")?,
        body_limit: required("SERVER_BODY_LIMIT")?,
        timeout: required("SERVER_TIMEOUT")?,
    };

    let database = Database {
        url: std::env::var("DATABASE_URL").context("DATABASE_URL is invalid")?,
        max_pool_size: optional("DATABASE_MAX_POOL_SIZE")?.unwrap_or(DEFAULT_MAX_POOL_SIZE),
    };

    Ok(DotEnvyConfig { server, database })
}

fn required<T>(key: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    std::env::var(key)
        .with_context(|| format!("{} is invalid", key))?
        .parse::<T>()
        .with_context(|| format!("{} is invalid", key))
}

fn optional<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{} is invalid", key)),
        _ => Ok(None),
    }
}
