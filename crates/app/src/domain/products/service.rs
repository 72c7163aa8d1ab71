//! Products service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use url::Url;

use crate::{
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::ProductsRepository,
    },
    pricing::{MAX_PRICE, round_to_cents},
};

/// Product catalog backed by any [`ProductsRepository`].
#[derive(Clone)]
pub struct ProductCatalog {
    repository: Arc<dyn ProductsRepository>,
}

impl ProductCatalog {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self { repository }
    }
}

impl std::fmt::Debug for ProductCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductCatalog").finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductsService for ProductCatalog {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.repository.list_products().await?)
    }

    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .find_product(product)
            .await?
            .ok_or(ProductsServiceError::NotFound(product))
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let product = validate(product)?;

        Ok(self.repository.create_product(product).await?)
    }

    async fn delete_product(
        &self,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .delete_product(product)
            .await?
            .ok_or(ProductsServiceError::NotFound(product))
    }
}

/// Normalise a new product: trimmed name, price rounded to cents, absolute
/// http(s) image URL.
fn validate(product: NewProduct) -> Result<NewProduct, ProductsServiceError> {
    let name = product.name.trim();

    if name.is_empty() {
        return Err(ProductsServiceError::InvalidData("name must not be empty"));
    }

    if product.price < Decimal::ZERO {
        return Err(ProductsServiceError::InvalidData("price must not be negative"));
    }

    let price = round_to_cents(product.price);

    if price > MAX_PRICE {
        return Err(ProductsServiceError::InvalidData("price must be below 100000000"));
    }

    let image = product.image.trim();

    match Url::parse(image) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => return Err(ProductsServiceError::InvalidData("image must be an http(s) URL")),
    }

    Ok(NewProduct {
        name: name.to_string(),
        price,
        image: image.to_string(),
    })
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Every product in the catalog, ascending by id.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductId) -> Result<ProductRecord, ProductsServiceError>;

    /// Validate and insert a new product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Remove a product, returning what was removed. Cart lines holding it
    /// go with it.
    async fn delete_product(
        &self,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError>;
}
