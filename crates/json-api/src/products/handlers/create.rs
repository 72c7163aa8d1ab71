//! Create Product Handler

use rust_decimal::{Decimal, prelude::FromPrimitive};
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use storefront_app::domain::products::data::NewProduct;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductResponse},
};

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Display name; surrounding whitespace is dropped
    pub name: String,

    /// Unit price, rounded to cents on save
    pub price: f64,

    /// Absolute http(s) image URL
    pub image: String,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = StatusError;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        let price = Decimal::from_f64(request.price)
            .ok_or_else(|| StatusError::bad_request().brief("price must be a finite number"))?;

        Ok(NewProduct {
            name: request.name,
            price,
            image: request.image,
        })
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let product = NewProduct::try_from(json.into_inner())?;

    let created = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?;

    info!(product_id = %created.id, "product created");

    res.add_header(LOCATION, format!("/products/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
