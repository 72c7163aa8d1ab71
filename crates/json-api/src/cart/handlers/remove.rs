//! Remove From Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    cart::{errors::into_status_error, models::CartResponse},
    extensions::*,
    params::positive_id,
};

/// Remove From Cart Handler
///
/// Deletes a whole cart line, whatever its quantity.
#[endpoint(
    tags("cart"),
    summary = "Remove From Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart after the removal"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart item not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.remove",
    skip(id, depot),
    fields(line_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let line = positive_id(id.into_inner(), "id")?;

    tracing::Span::current().record("line_id", tracing::field::display(line));

    let cart = state
        .app
        .carts
        .remove_from_cart(line)
        .await
        .map_err(into_status_error)?;

    tracing::info!(line_id = %line, "removed cart line");

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::carts::{
        CartsServiceError, MockCartsService, models::Cart, records::CartLineId,
    };

    use crate::test_helpers::{cart_service, strict_carts_mock};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        cart_service(carts, Router::with_path("cart/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_remove_returns_the_remaining_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_from_cart()
            .once()
            .withf(|line| *line == CartLineId::from_i64(3))
            .return_once(|_| Ok(Cart::empty()));

        let mut res = TestClient::delete("http://example.com/cart/3")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartResponse = res.take_json().await?;
        assert!(body.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_unknown_line_returns_404() {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_from_cart()
            .once()
            .return_once(|line| Err(CartsServiceError::CartItemNotFound(line)));

        let res = TestClient::delete("http://example.com/cart/999")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_remove_non_positive_id_returns_400() {
        let res = TestClient::delete("http://example.com/cart/0")
            .send(&make_service(strict_carts_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
