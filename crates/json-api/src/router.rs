//! App Router

use salvo::Router;

use crate::{cart, healthcheck, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("cart")
                .get(cart::get::handler)
                .post(cart::add::handler)
                .push(Router::with_path("{id}").delete(cart::remove::handler)),
        )
}
