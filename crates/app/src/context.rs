//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    products::{PgProductsService, ProductsService},
};

/// Errors raised while building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The database connection could not be established.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Shared handles to the application services.
#[derive(Clone)]
pub struct AppContext {
    /// Product catalog operations.
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self {
            products: Arc::new(PgProductsService::new(pool)),
        })
    }
}
