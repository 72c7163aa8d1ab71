//! Products service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::products::records::ProductId;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("Product with ID {0} not found")]
    NotFound(ProductId),

    #[error("invalid product: {0}")]
    InvalidData(&'static str),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation) => Self::InvalidData("missing required field"),
            Some(ErrorKind::CheckViolation) => Self::InvalidData("violates a catalog constraint"),
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_stay_opaque() {
        let error = ProductsServiceError::from(Error::PoolTimedOut);

        assert!(
            matches!(error, ProductsServiceError::Sql(Error::PoolTimedOut)),
            "expected Sql, got {error:?}"
        );
    }

    #[test]
    fn not_found_message_names_the_product() {
        let error = ProductsServiceError::NotFound(ProductId::from_i64(42));

        assert_eq!(error.to_string(), "Product with ID 42 not found");
    }
}
