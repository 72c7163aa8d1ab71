//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

/// Typed access to what the router injects into the depot.
pub(crate) trait DepotExt {
    /// The shared server state, or a 500 when the router was built without it.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_missing| {
            error!("server state missing from depot");

            StatusError::internal_server_error()
        })
    }
}
