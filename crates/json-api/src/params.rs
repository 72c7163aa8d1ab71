//! Path and body identifier checks

use salvo::prelude::StatusError;
use storefront_app::ids::TypedId;

/// Accept only store-assignable ids, which start at one.
pub(crate) fn positive_id<T>(raw: i64, field: &str) -> Result<TypedId<T>, StatusError> {
    if raw < 1 {
        return Err(StatusError::bad_request().brief(format!("{field} must be a positive integer")));
    }

    Ok(TypedId::from_i64(raw))
}
