//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound(_) => StatusError::not_found().brief(error.to_string()),
        ProductsServiceError::InvalidData(reason) => {
            StatusError::bad_request().brief(format!("Invalid product payload: {reason}"))
        }
        ProductsServiceError::Sql(source) => {
            error!(%source, "product storage failed");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use storefront_app::domain::products::records::ProductId;

    use super::*;

    #[test]
    fn each_variant_has_its_status() {
        let cases = [
            (
                ProductsServiceError::NotFound(ProductId::from_i64(3)),
                StatusCode::NOT_FOUND,
            ),
            (
                ProductsServiceError::InvalidData("name must not be empty"),
                StatusCode::BAD_REQUEST,
            ),
            (
                ProductsServiceError::Sql(sqlx::Error::PoolTimedOut),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(into_status_error(error).code, expected);
        }
    }

    #[test]
    fn not_found_brief_names_the_product() {
        let status = into_status_error(ProductsServiceError::NotFound(ProductId::from_i64(3)));

        assert_eq!(status.brief, "Product with ID 3 not found");
    }
}
