//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db, PoolSettings},
    domain::{
        EntitiesService, SqliteEntitiesService, categories::Category, products::Product,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database schema")]
    Schema(#[source] sqlx::Error),
}

/// One service per mapped entity type.
#[derive(Clone)]
pub struct AppContext {
    pub categories: Arc<dyn EntitiesService<Category>>,
    pub products: Arc<dyn EntitiesService<Product>>,
}

impl AppContext {
    #[must_use]
    pub fn new(
        categories: Arc<dyn EntitiesService<Category>>,
        products: Arc<dyn EntitiesService<Product>>,
    ) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Build application context from a database URL, creating the schema if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or applying the schema fails.
    pub async fn from_database_url(
        url: &str,
        settings: PoolSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, settings)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Schema)?;

        info!(max_connections = settings.max_connections, "database ready");

        Ok(Self::from_db(&Db::new(pool)))
    }

    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self::new(
            Arc::new(SqliteEntitiesService::new(db.clone())),
            Arc::new(SqliteEntitiesService::new(db.clone())),
        )
    }
}
