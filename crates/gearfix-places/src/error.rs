use thiserror::Error;

/// Errors returned by the place-search / geocoding provider client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network or TLS failure from the underlying HTTP client, including
    /// request timeouts and non-2xx HTTP statuses.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-OK status in the JSON envelope
    /// (e.g. `REQUEST_DENIED`, `OVER_QUERY_LIMIT`, `INVALID_REQUEST`).
    /// `ZERO_RESULTS` is not an error and never produces this variant.
    #[error("provider API error {status}: {message}")]
    ApiError { status: String, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not parseable.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
