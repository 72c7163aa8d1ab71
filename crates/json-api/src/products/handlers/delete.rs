//! Delete Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use crate::{
    extensions::*,
    params::positive_id,
    products::{errors::into_status_error, models::ProductResponse},
};

/// Delete Product Handler
///
/// Removes a product along with any cart line holding it and returns what
/// was removed.
#[endpoint(
    tags("products"),
    summary = "Delete Product",
    responses(
        (status_code = StatusCode::OK, description = "Product deleted"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.delete",
    skip(id, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let product = positive_id(id.into_inner(), "id")?;

    tracing::Span::current().record("product_id", tracing::field::display(product));

    let deleted = state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(into_status_error)?;

    info!("product deleted");

    Ok(Json(deleted.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductId,
    };

    use crate::test_helpers::products_service;

    use super::{super::tests::*, *};

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_returns_the_removed_product() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .withf(|id| *id == ProductId::from_i64(8))
            .return_once(|_| Ok(make_product(8)));

        let mut res = TestClient::delete("http://example.com/products/8")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductResponse = res.take_json().await?;
        assert_eq!(body.id, 8);

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_product_returns_404() {
        let mut products = MockProductsService::new();

        products
            .expect_delete_product()
            .once()
            .return_once(|id| Err(ProductsServiceError::NotFound(id)));

        let res = TestClient::delete("http://example.com/products/8")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
