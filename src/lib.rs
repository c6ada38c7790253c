pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use error::{AppError, AppResult};
pub use models::{SearchEndpoint, SearchResults, TotalResults};
pub use services::providers::{OmdbProvider, SearchProvider};
