pub mod api;
pub mod config;
pub mod error;
pub mod router;

pub use error::ApiError;
