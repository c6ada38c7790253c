use crate::{
    error::AppResult,
    models::{SearchEndpoint, SearchResults, Title},
    services::providers::SearchProvider,
};
use std::sync::Arc;

/// Service function for endpoint search
///
/// Delegates to the configured SearchProvider, maintaining a clean separation
/// between HTTP routing and business logic.
pub async fn search(
    provider: Arc<dyn SearchProvider>,
    endpoint: &str,
    query: &str,
) -> AppResult<SearchResults> {
    provider.search(endpoint, query).await
}

/// Movie search decoded into typed titles
pub async fn search_titles(provider: Arc<dyn SearchProvider>, query: &str) -> AppResult<Vec<Title>> {
    let results = provider.search(SearchEndpoint::Movie.as_str(), query).await?;
    Ok(results.titles())
}
