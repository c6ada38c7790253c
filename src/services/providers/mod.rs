/// Search data provider abstraction
///
/// Callers depend on this trait rather than on a concrete upstream, which keeps
/// HTTP handlers testable with a mocked provider.
use crate::{error::AppResult, models::SearchResults};

pub mod omdb;

pub use omdb::OmdbProvider;

/// Trait for upstream search providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search the upstream for `query` under the logical `endpoint`
    /// (`"movie"` or `"person"`).
    ///
    /// Either returns the full normalized result or fails; there is no
    /// partial success.
    async fn search(&self, endpoint: &str, query: &str) -> AppResult<SearchResults>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
