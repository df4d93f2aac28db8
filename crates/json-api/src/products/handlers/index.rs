//! Product Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, products::get::ProductResponse, state::State};

/// Product Index Handler
///
/// Returns the list of products as a bare JSON array. An empty store is a
/// valid, non-error outcome and yields `[]`.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
