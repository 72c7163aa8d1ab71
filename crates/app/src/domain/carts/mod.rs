//! Carts

pub mod adjustment;
pub mod data;
pub mod errors;
pub mod models;
pub mod records;
pub mod repository;
pub mod service;
pub mod totals;

pub use errors::CartsServiceError;
pub use repository::{CartLinesRepository, MockCartLinesRepository, PgCartLinesRepository};
pub use service::*;
