//! Storefront application domain and persistence modules.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;
pub mod memory;
pub mod pricing;
pub mod seed;

#[cfg(test)]
mod test;
