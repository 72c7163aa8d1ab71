//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::ProductNotFound(_) | CartsServiceError::CartItemNotFound(_) => {
            StatusError::not_found().brief(error.to_string())
        }
        CartsServiceError::InvalidQuantity => StatusError::bad_request().brief(error.to_string()),
        CartsServiceError::TotalOutOfRange => {
            error!("cart total does not fit in a decimal");

            StatusError::internal_server_error()
        }
        CartsServiceError::Sql(source) => {
            error!(%source, "cart storage failed");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use storefront_app::domain::{carts::records::CartLineId, products::records::ProductId};

    use super::*;

    #[test]
    fn caller_errors_keep_their_messages() {
        let missing_line = into_status_error(CartsServiceError::CartItemNotFound(
            CartLineId::from_i64(999),
        ));
        let missing_product =
            into_status_error(CartsServiceError::ProductNotFound(ProductId::from_i64(42)));
        let invalid = into_status_error(CartsServiceError::InvalidQuantity);

        assert_eq!(missing_line.code, StatusCode::NOT_FOUND);
        assert_eq!(missing_line.brief, "Cart item with ID 999 not found");
        assert_eq!(missing_product.code, StatusCode::NOT_FOUND);
        assert_eq!(missing_product.brief, "Product with ID 42 not found");
        assert_eq!(invalid.code, StatusCode::BAD_REQUEST);
        assert_eq!(
            invalid.brief,
            "Quantity must be positive when adding a new item to cart"
        );
    }

    #[test]
    fn total_overflow_is_a_server_error() {
        let status = into_status_error(CartsServiceError::TotalOutOfRange);

        assert_eq!(status.code, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn storage_failures_are_opaque() {
        let status = into_status_error(CartsServiceError::Sql(sqlx::Error::PoolTimedOut));

        assert_eq!(status.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            !status.brief.contains("pool"),
            "storage details must not leak: {}",
            status.brief
        );
    }
}
