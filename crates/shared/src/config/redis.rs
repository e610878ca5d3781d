use anyhow::{Context, Result};
use deadpool_redis::{Config as PoolConfig, Pool, Runtime};
use tracing::info;

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub db: u8,
    pub password: Option<String>,
}

impl RedisConfig {
    pub fn new(host: String, port: u16, db: u8, password: Option<String>) -> Self {
        Self {
            host,
            port,
            db,
            password,
        }
    }

    pub fn from_env() -> Self {
        let host = std::env::var("REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port = std::env::var("REDIS_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(6379);
        let db = std::env::var("REDIS_DB")
            .ok()
            .and_then(|v| v.parse::<u8>().ok())
            .unwrap_or(0);
        let password = std::env::var("REDIS_PASSWORD").ok().filter(|v| !v.is_empty());

        Self::new(host, port, db, password)
    }

    pub fn url(&self) -> String {
        match &self.password {
            Some(pw) => format!(
                "redis://:{}@{}:{}/{}",
                pw, self.host, self.port, self.db
            ),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }
}

pub struct RedisClient;

impl RedisClient {
    pub fn create_pool(config: &RedisConfig) -> Result<Pool> {
        info!("Creating redis connection pool");

        let pool = PoolConfig::from_url(config.url())
            .create_pool(Some(Runtime::Tokio1))
            .context("Failed to create Redis connection pool")?;

        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_includes_password_when_set() {
        let config = RedisConfig::new("redis".into(), 6379, 0, Some("hunter2".into()));
        assert_eq!(config.url(), "redis://:hunter2@redis:6379/0");

        let config = RedisConfig::new("127.0.0.1".into(), 6380, 1, None);
        assert_eq!(config.url(), "redis://127.0.0.1:6380/1");
    }
}
