//! Shared application state handed to every handler through `web::Data`.
use std::sync::Arc;

use crate::auth::{hash_password, TokenKeys};
use crate::config::Config;
use crate::error::AppError;
use crate::store::{MemoryStore, PgStore, ProductStore, UserStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub products: Arc<dyn ProductStore>,
    pub tokens: TokenKeys,
    /// bcrypt work factor used when hashing new passwords.
    pub bcrypt_cost: u32,
    /// Verified against when a login names an unknown email.
    pub decoy_hash: String,
}

impl AppState {
    /// Builds state around a single store serving both users and products.
    pub fn new<S>(store: S, tokens: TokenKeys, bcrypt_cost: u32) -> Self
    where
        S: UserStore + ProductStore + 'static,
    {
        let store = Arc::new(store);
        let decoy_hash = hash_password("decoy-password", bcrypt_cost).unwrap_or_else(|e| {
            log::error!("could not build login decoy hash: {}", e);
            String::new()
        });
        Self {
            users: store.clone(),
            products: store,
            tokens,
            bcrypt_cost,
            decoy_hash,
        }
    }

    /// Connects to Postgres and runs migrations when `DATABASE_URL` is set;
    /// falls back to the in-memory store otherwise.
    pub async fn from_config(config: &Config) -> Result<Self, AppError> {
        let tokens = TokenKeys::new(&config.jwt_secret, config.jwt_expiration_hours);

        match &config.database_url {
            Some(url) => {
                let store = PgStore::connect(url, config.database_max_connections).await?;
                store.migrate().await.map_err(|e| {
                    AppError::DatabaseError(format!("Failed to run migrations: {}", e))
                })?;
                log::info!("Connected to Postgres, migrations applied");
                Ok(Self::new(store, tokens, config.bcrypt_cost))
            }
            None => {
                log::warn!("DATABASE_URL not set, using the in-memory store; data will not persist");
                Ok(Self::new(MemoryStore::new(), tokens, config.bcrypt_cost))
            }
        }
    }
}
