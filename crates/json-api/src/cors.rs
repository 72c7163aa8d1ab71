//! Browser CORS policy

use std::time::Duration;

use salvo::{
    cors::{AllowOrigin, Cors, CorsHandler},
    http::{HeaderValue, Method, header::InvalidHeaderValue},
};

/// Build the CORS handler for `origin`, where `*` admits any origin.
pub(crate) fn handler(origin: &str) -> Result<CorsHandler, InvalidHeaderValue> {
    let allow_origin = match origin.trim() {
        "*" => AllowOrigin::any(),
        exact => AllowOrigin::exact(HeaderValue::from_str(exact)?),
    };

    Ok(Cors::new()
        .allow_origin(allow_origin)
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers("content-type")
        .max_age(Duration::from_secs(60 * 60))
        .into_handler())
}
