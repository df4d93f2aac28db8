//! Products Repository

use async_trait::async_trait;
use mockall::automock;
use sqlx::{PgPool, Postgres, query, query_as};

use crate::products::{
    errors::ProductsRepositoryError,
    models::{NewProduct, Product},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const FIND_PRODUCT_SQL: &str = include_str!("sql/find_product.sql");
const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const SAVE_PRODUCT_SQL: &str = include_str!("sql/save_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

/// CRUD persistence operations over [`Product`] rows keyed by identity.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Retrieve all stored products, in store order.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsRepositoryError>;

    /// Retrieve the product with the given identity, if any.
    async fn find_product(&self, id: i64) -> Result<Option<Product>, ProductsRepositoryError>;

    /// Insert a draft; the store assigns the identity.
    async fn insert_product(&self, product: NewProduct)
    -> Result<Product, ProductsRepositoryError>;

    /// Overwrite the row at `product.id` wholesale.
    async fn save_product(&self, product: Product) -> Result<Product, ProductsRepositoryError>;

    /// Delete the row with the given identity, returning the affected count.
    async fn delete_product(&self, id: i64) -> Result<u64, ProductsRepositoryError>;
}

/// `PostgreSQL` implementation of [`ProductsRepository`].
#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    pool: PgPool,
}

impl PgProductsRepository {
    /// Create a repository over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsRepositoryError> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_product(&self, id: i64) -> Result<Option<Product>, ProductsRepositoryError> {
        query_as::<Postgres, Product>(FIND_PRODUCT_SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn insert_product(
        &self,
        product: NewProduct,
    ) -> Result<Product, ProductsRepositoryError> {
        query_as::<Postgres, Product>(INSERT_PRODUCT_SQL)
            .bind(product.name)
            .bind(product.description)
            .bind(product.image)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn save_product(&self, product: Product) -> Result<Product, ProductsRepositoryError> {
        query_as::<Postgres, Product>(SAVE_PRODUCT_SQL)
            .bind(product.id)
            .bind(product.name)
            .bind(product.description)
            .bind(product.image)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn delete_product(&self, id: i64) -> Result<u64, ProductsRepositoryError> {
        let result = query(DELETE_PRODUCT_SQL)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(ProductsRepositoryError::from)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_maps_to_sql() {
        let error = ProductsRepositoryError::from(sqlx::Error::RowNotFound);

        assert!(
            matches!(error, ProductsRepositoryError::Sql(_)),
            "expected Sql variant"
        );
    }
}
