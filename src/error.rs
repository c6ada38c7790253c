use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// The OMDb credential is missing. Raised before any network I/O.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The caller asked for an endpoint outside `movie` / `person`.
    #[error("Unsupported endpoint: {0}")]
    UnsupportedEndpoint(String),

    /// Upstream answered with a non-success HTTP status.
    #[error("OMDb API error: {status} {status_text}")]
    Transport { status: u16, status_text: String },

    /// Upstream answered 2xx but flagged `"Response": "False"`.
    #[error("OMDb error: {0}")]
    Upstream(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UnsupportedEndpoint(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Transport { .. }
            | AppError::Upstream(_)
            | AppError::HttpClient(_)
            | AppError::Decode(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_endpoint_maps_to_bad_request() {
        let response = AppError::UnsupportedEndpoint("tv".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_credential_maps_to_internal_error() {
        let response =
            AppError::Configuration("OMDB_API_KEY is not set".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_upstream_failures_map_to_bad_gateway() {
        let transport = AppError::Transport {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(transport.into_response().status(), StatusCode::BAD_GATEWAY);

        let upstream = AppError::Upstream("Movie not found!".to_string());
        assert_eq!(upstream.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_transport_message_carries_status() {
        let err = AppError::Transport {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "OMDb API error: 503 Service Unavailable");
    }
}
