use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::SearchResults,
    routes::AppState,
    services::title_search,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
}

/// Handler for endpoint search (`movie` or `person`)
pub async fn search(
    State(state): State<AppState>,
    Path(endpoint): Path<String>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<SearchResults>> {
    tracing::debug!(
        request_id = %request_id,
        endpoint = %endpoint,
        provider = state.provider.name(),
        "Processing search request"
    );

    let results = title_search::search(state.provider.clone(), &endpoint, &params.q).await?;
    Ok(Json(results))
}
