//! Catalog Domain Concerns

mod associations;
pub mod categories;
pub mod entity;
pub mod errors;
pub mod products;
pub mod service;

pub use errors::EntitiesServiceError;
pub use service::*;
