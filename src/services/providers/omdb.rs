/// OMDb API provider
///
/// OMDb exposes a single search route (`?s=`). The `movie` endpoint narrows it
/// with `type=movie`; `person` has no upstream equivalent and falls back to the
/// same title search without a type filter.
///
/// One GET per call. No timeout beyond the transport defaults, no retry.
use crate::{
    error::{AppError, AppResult},
    models::{OmdbSearchResponse, SearchEndpoint, SearchResults},
    services::{credentials::CredentialProvider, providers::SearchProvider},
};
use reqwest::{Client as HttpClient, Url};
use std::sync::Arc;

pub const OMDB_API_URL: &str = "https://www.omdbapi.com/";

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    credentials: Arc<dyn CredentialProvider>,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(credentials: Arc<dyn CredentialProvider>, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            credentials,
            api_url,
        }
    }

    async fn execute(&self, endpoint: &str, query: &str) -> AppResult<SearchResults> {
        // Checked before anything else, including the endpoint
        let api_key = self
            .credentials
            .api_key()
            .ok_or_else(|| AppError::Configuration("OMDb API key is not set".to_string()))?;

        let endpoint: SearchEndpoint = endpoint.parse()?;
        let url = build_search_url(&self.api_url, &api_key, endpoint, query)?;

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Transport {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await?;
        let payload: OmdbSearchResponse = serde_json::from_slice(&body)?;

        if payload.is_failure() {
            return Err(AppError::Upstream(payload.error_message()));
        }

        Ok(SearchResults::from(payload))
    }
}

/// Builds the OMDb request target for a search.
///
/// Parameters are `apikey` and `s`, plus `type=movie` for the movie endpoint.
/// Percent-encoding is left to [`Url`].
pub fn build_search_url(
    api_url: &str,
    api_key: &str,
    endpoint: SearchEndpoint,
    query: &str,
) -> AppResult<Url> {
    let mut url = Url::parse(api_url)
        .map_err(|e| AppError::Internal(format!("Invalid OMDb API URL {}: {}", api_url, e)))?;

    {
        let mut params = url.query_pairs_mut();
        params.append_pair("apikey", api_key);
        params.append_pair("s", query);
        if endpoint == SearchEndpoint::Movie {
            params.append_pair("type", "movie");
        }
    }

    Ok(url)
}

#[async_trait::async_trait]
impl SearchProvider for OmdbProvider {
    async fn search(&self, endpoint: &str, query: &str) -> AppResult<SearchResults> {
        match self.execute(endpoint, query).await {
            Ok(results) => {
                tracing::info!(
                    endpoint = %endpoint,
                    query = %query,
                    results = results.results.len(),
                    provider = self.name(),
                    "Search completed"
                );
                Ok(results)
            }
            Err(e) => {
                tracing::error!(
                    endpoint = %endpoint,
                    error = %e,
                    provider = self.name(),
                    "Error calling OMDb API"
                );
                Err(e)
            }
        }
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::credentials::MockCredentialProvider;
    use std::collections::BTreeMap;

    fn query_params(url: &Url) -> BTreeMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn create_test_provider(api_key: Option<&'static str>) -> OmdbProvider {
        let mut credentials = MockCredentialProvider::new();
        credentials
            .expect_api_key()
            .times(1)
            .returning(move || api_key.map(str::to_string));

        // Nothing listens here; tests using it must fail before any I/O
        OmdbProvider::new(Arc::new(credentials), "http://127.0.0.1:9/".to_string())
    }

    #[test]
    fn test_movie_url_params() {
        let url =
            build_search_url(OMDB_API_URL, "test_key", SearchEndpoint::Movie, "Inception").unwrap();

        assert_eq!(url.host_str(), Some("www.omdbapi.com"));
        assert_eq!(url.path(), "/");

        let params = query_params(&url);
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["apikey", "s", "type"]);
        assert_eq!(params["apikey"], "test_key");
        assert_eq!(params["s"], "Inception");
        assert_eq!(params["type"], "movie");
    }

    #[test]
    fn test_person_url_params() {
        let url =
            build_search_url(OMDB_API_URL, "test_key", SearchEndpoint::Person, "Nolan").unwrap();

        let params = query_params(&url);
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["apikey", "s"]);
        assert_eq!(params["s"], "Nolan");
    }

    #[test]
    fn test_query_is_percent_encoded() {
        let url = build_search_url(
            OMDB_API_URL,
            "test_key",
            SearchEndpoint::Movie,
            "Fast & Furious?",
        )
        .unwrap();

        assert!(url.as_str().contains("s=Fast+%26+Furious%3F"));
        assert_eq!(query_params(&url)["s"], "Fast & Furious?");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = build_search_url("not a url", "test_key", SearchEndpoint::Movie, "Inception")
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_io() {
        let provider = create_test_provider(None);

        let err = provider.search("movie", "Inception").await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_missing_credential_checked_before_endpoint() {
        let provider = create_test_provider(None);

        let err = provider.search("tv", "Inception").await.unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_unsupported_endpoint_fails_before_io() {
        let provider = create_test_provider(Some("test_key"));

        let err = provider.search("tv", "Inception").await.unwrap_err();
        assert!(matches!(err, AppError::UnsupportedEndpoint(ref e) if e == "tv"));
    }

    #[test]
    fn test_provider_name() {
        let provider = OmdbProvider::new(
            Arc::new(MockCredentialProvider::new()),
            OMDB_API_URL.to_string(),
        );
        assert_eq!(provider.name(), "omdb");
    }
}
