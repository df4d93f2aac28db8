//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::products::{
    errors::ProductsServiceError,
    models::{NewProduct, Product},
    repository::{PgProductsRepository, ProductsRepository},
};

/// Product catalog operations.
///
/// Missing identities are reported as `Ok(None)`, never as an error; errors
/// are reserved for store-level faults.
#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: i64) -> Result<Option<Product>, ProductsServiceError>;

    /// Creates a new product; the store assigns the identity.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Replaces the product at `id` wholesale with the given draft.
    async fn update_product(
        &self,
        id: i64,
        product: NewProduct,
    ) -> Result<Option<Product>, ProductsServiceError>;

    /// Deletes the product at `id`, returning the pre-deletion snapshot.
    async fn delete_product(&self, id: i64) -> Result<Option<Product>, ProductsServiceError>;
}

/// Store-backed implementation of [`ProductsService`].
#[derive(Clone)]
pub struct PgProductsService {
    repository: Arc<dyn ProductsRepository>,
}

impl PgProductsService {
    /// Create a service backed by a `PostgreSQL` repository.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: Arc::new(PgProductsRepository::new(pool)),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        self.repository.list_products().await.map_err(Into::into)
    }

    async fn get_product(&self, id: i64) -> Result<Option<Product>, ProductsServiceError> {
        self.repository.find_product(id).await.map_err(Into::into)
    }

    #[tracing::instrument(skip(self, product), err)]
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let created = self.repository.insert_product(product).await?;

        tracing::info!(product_id = created.id, "created product");

        Ok(created)
    }

    #[tracing::instrument(skip(self, product), err)]
    async fn update_product(
        &self,
        id: i64,
        product: NewProduct,
    ) -> Result<Option<Product>, ProductsServiceError> {
        if self.repository.find_product(id).await?.is_none() {
            return Ok(None);
        }

        // Full replace: the path identity wins over anything the payload
        // carried.
        let updated = self
            .repository
            .save_product(Product::from_draft(id, product))
            .await?;

        Ok(Some(updated))
    }

    #[tracing::instrument(skip(self), err)]
    async fn delete_product(&self, id: i64) -> Result<Option<Product>, ProductsServiceError> {
        let Some(product) = self.repository.find_product(id).await? else {
            return Ok(None);
        };

        self.repository.delete_product(id).await?;

        tracing::info!(product_id = id, "deleted product");

        Ok(Some(product))
    }
}
