//! Update Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalog_app::products::models::NewProduct;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Update Product Request
///
/// Full-replace payload. Any `id` in the body is discarded; the path `id`
/// wins.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
}

impl From<UpdateProductRequest> for NewProduct {
    fn from(request: UpdateProductRequest) -> Self {
        NewProduct {
            name: request.name,
            description: request.description,
            image: request.image,
            price: request.price,
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(id, json, depot, res),
    fields(product_id = tracing::field::Empty, price = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = id.into_inner();
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(id));
    span.record("price", tracing::field::display(request.price));

    let product = state
        .app
        .products
        .update_product(id, request.into())
        .await
        .map_err(into_status_error)?
        .or_404("Product not found")?;

    res.add_header(LOCATION, format!("/products/{id}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    tracing::info!(product_id = id, "updated product");

    Ok(Json(product.into()))
}
