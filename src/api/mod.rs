//! Catalog data models and loading.

mod catalog;
pub mod models;

pub use catalog::*;
pub use models::*;
