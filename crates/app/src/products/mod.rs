//! Products

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::{ProductsRepositoryError, ProductsServiceError};
pub use repository::*;
pub use service::*;
