//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalog_app::products::models::NewProduct;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Create Product Request
///
/// Any `id` in the payload is ignored; the store assigns the identity.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            description: request.description,
            image: request.image,
            price: request.price,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use catalog_app::products::{MockProductsService, ProductsServiceError, models::Product};

    use crate::test_helpers::products_service;

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_returns_201_with_assigned_id() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| {
                *new == NewProduct {
                    name: "Test".to_string(),
                    description: "Test".to_string(),
                    image: "TestImage".to_string(),
                    price: 1.5,
                }
            })
            .return_once(|new| Ok(Product::from_draft(1, new)));

        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "name": "Test",
                "description": "Test",
                "image": "TestImage",
                "price": 1.5,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(location, Some("/products/1"));

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.id, 1);
        assert_eq!(body.name, "Test");
        assert_eq!(body.description, "Test");
        assert_eq!(body.image, "TestImage");
        assert!((body.price - 1.5).abs() < f64::EPSILON, "price round-trips");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_ignores_payload_id() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| new.name == "Test")
            .return_once(|new| Ok(Product::from_draft(42, new)));

        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "id": 7,
                "name": "Test",
                "description": "Test",
                "image": "TestImage",
                "price": 1.5,
            }))
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.id, 42, "store-assigned id wins over payload id");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_malformed_body_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();
        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Test", "price": "not-a-number" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_missing_body_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();
        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let res = TestClient::post("http://example.com/products")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_store_failure_returns_500() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::Sql(sqlx::Error::RowNotFound)));

        repo.expect_get_product().never();
        repo.expect_list_products().never();
        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "name": "Test",
                "description": "Test",
                "image": "TestImage",
                "price": 1.5,
            }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
