use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub db_pool_size: u32,
    pub query_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let database_url = env::var("SERIES_DATABASE_URL")
            .or_else(|_| env::var("DATABASE_URL"))
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .context("SERIES_DATABASE_URL or DATABASE_URL is required")?;

        let db_pool_size = env::var("SERIES_DB_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let query_timeout_ms = env::var("SERIES_QUERY_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(5000);

        Ok(Self {
            database_url,
            db_pool_size,
            query_timeout_ms,
        })
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}
