//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    products::{MockProductsService, models::Product},
};

use crate::state::State;

pub(crate) fn make_product(id: i64) -> Product {
    Product {
        id,
        name: "Test".to_string(),
        description: "Test".to_string(),
        image: "TestImage".to_string(),
        price: 1.5,
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        products: Arc::new(products),
    }))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
