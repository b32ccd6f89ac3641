//! Categories

pub mod models;
mod repository;

pub use models::Category;
