use crate::{abstract_trait::session::DynSessionStore, cache::SessionStore, di::DependenciesInject};
use anyhow::{Context, Result};
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionManager, Hashing, JwtConfig, RedisClient, RedisConfig},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub session: DynSessionStore,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let pool = ConnectionManager::new_pool(&config.database_url)
            .await
            .context("Failed to create database connection pool")?;

        if config.run_migrations {
            info!("Running database migrations");
            ConnectionManager::run_migrations(&pool)
                .await
                .context("Failed to run migrations")?;
        }

        info!("Initializing Redis connection for session store");
        let redis_config = RedisConfig::from_env();
        let redis_pool =
            RedisClient::create_pool(&redis_config).context("Failed to connect to Redis")?;

        let session = Arc::new(SessionStore::new(redis_pool)) as DynSessionStore;

        let di_container = DependenciesInject::new(pool, hashing, jwt_config.clone());

        Ok(Self {
            jwt_config,
            session,
            di_container,
        })
    }
}
