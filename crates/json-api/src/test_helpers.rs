//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    domain::{carts::MockCartsService, products::MockProductsService},
};

use crate::state::State;

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_delete_product().never();

    products
}

pub(crate) fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_to_cart().never();
    carts.expect_remove_from_cart().never();

    carts
}

fn state_with(products: MockProductsService, carts: MockCartsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(products), Arc::new(carts)))
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(products, strict_carts_mock())))
            .push(route),
    )
}

pub(crate) fn cart_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with(strict_products_mock(), carts)))
            .push(route),
    )
}
