//! HTTP client for the place-search / geocoding provider REST API.
//!
//! Wraps `reqwest` with provider-specific error handling, API key
//! management, and typed response deserialization. Every endpoint checks the
//! `"status"` field in the JSON envelope: `"OK"` and `"ZERO_RESULTS"` are
//! success (the latter yields an empty result), anything else surfaces as
//! [`PlacesError::ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{GeocodeHit, GeocodeResponse, PlacesResponse, RawPlace};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Client for the place-search provider REST API.
///
/// Manages the HTTP client, API key, and base URL. Use [`PlacesClient::new`]
/// for production or [`PlacesClient::with_base_url`] to point at a mock
/// server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production provider API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: the base URL must end with exactly one slash so that
        // Url::join appends endpoint paths instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: normalised.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Geocodes a free-text location string (postal code, city, landmark,
    /// or street address).
    ///
    /// Returns `Ok(None)` when the provider finds no match (`ZERO_RESULTS`);
    /// otherwise the first (best) result.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiError`] if the API returns an error status.
    /// - [`PlacesError::Http`] on network failure, timeout, or non-2xx HTTP
    ///   status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, PlacesError> {
        let url = self.build_url("geocode/json", &[("address", query)])?;
        let body = self.request_json(&url).await?;

        let response: GeocodeResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("geocode(query={query})"),
                source: e,
            })?;

        if response.status == "ZERO_RESULTS" {
            return Ok(None);
        }
        Self::check_status(&response.status, response.error_message.as_deref())?;

        Ok(response.results.into_iter().next().map(|r| GeocodeHit {
            latitude: r.geometry.location.lat,
            longitude: r.geometry.location.lng,
            formatted_address: r.formatted_address.unwrap_or_default(),
        }))
    }

    /// Runs one nearby-search call: places matching `keyword` within
    /// `radius_m` metres of the given point.
    ///
    /// `ZERO_RESULTS` is success with an empty list.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::geocode`].
    pub async fn nearby_search(
        &self,
        lat: f64,
        lng: f64,
        radius_m: u32,
        keyword: &str,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        let location = format!("{lat},{lng}");
        let radius = radius_m.to_string();
        let url = self.build_url(
            "place/nearbysearch/json",
            &[
                ("location", &location),
                ("radius", &radius),
                ("keyword", keyword),
            ],
        )?;
        self.search_request(&url, &format!("nearby_search(keyword={keyword})"))
            .await
    }

    /// Runs one text-search call: free-text `query` biased to `radius_m`
    /// metres around the given point.
    ///
    /// `ZERO_RESULTS` is success with an empty list.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::geocode`].
    pub async fn text_search(
        &self,
        query: &str,
        lat: f64,
        lng: f64,
        radius_m: u32,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        let location = format!("{lat},{lng}");
        let radius = radius_m.to_string();
        let url = self.build_url(
            "place/textsearch/json",
            &[("query", query), ("location", &location), ("radius", &radius)],
        )?;
        self.search_request(&url, &format!("text_search(query={query})"))
            .await
    }

    /// Shared request/parse/status-check path for the two search endpoints.
    async fn search_request(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        let body = self.request_json(url).await?;

        let response: PlacesResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: context.to_owned(),
                source: e,
            })?;

        if response.status == "ZERO_RESULTS" {
            return Ok(Vec::new());
        }
        Self::check_status(&response.status, response.error_message.as_deref())?;

        Ok(response.results)
    }

    /// Builds the full endpoint URL with properly percent-encoded query
    /// parameters, appending the API key last.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url =
            self.base_url
                .join(endpoint)
                .map_err(|e| PlacesError::InvalidBaseUrl {
                    base_url: self.base_url.to_string(),
                    reason: e.to_string(),
                })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        tracing::debug!(path = url.path(), "provider request");
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_owned(),
            source: e,
        })
    }

    /// Maps a non-success envelope status to [`PlacesError::ApiError`].
    /// `ZERO_RESULTS` must be handled by the caller before this check.
    fn check_status(status: &str, error_message: Option<&str>) -> Result<(), PlacesError> {
        if status == "OK" {
            return Ok(());
        }
        Err(PlacesError::ApiError {
            status: status.to_owned(),
            message: error_message.unwrap_or("no error message").to_owned(),
        })
    }
}
