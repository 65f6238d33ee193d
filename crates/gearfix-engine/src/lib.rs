//! Search aggregation engine for locating nearby equipment service
//! providers.
//!
//! The pipeline for one request: resolve the ambiguous location input,
//! fan out a rate-limited keyword × radius × mode sweep against the
//! place-search provider, deduplicate by provider identity, annotate with
//! great-circle distance, score, rank, and cap.

pub mod dedupe;
pub mod keywords;
pub mod provider;
pub mod resolver;
pub mod score;
pub mod sweep;

use std::time::Duration;

use thiserror::Error;

use gearfix_core::{AppConfig, LocationQuery, SearchResult};
use gearfix_places::PlacesClient;

pub use dedupe::dedupe;
pub use keywords::keywords_for;
pub use provider::{Geocoder, PlaceSearch};
pub use score::{rank, MAX_RESULTS};
pub use sweep::{radius_ladder, SweepConfig, PROVIDER_MAX_RADIUS_M};

/// Smallest search radius a caller may request, in metres.
pub const MIN_RADIUS_M: u32 = 1000;
/// Largest search radius a caller may request, in metres.
pub const MAX_RADIUS_M: u32 = PROVIDER_MAX_RADIUS_M;

/// Typed failures surfaced to the caller of [`ServiceLocator::locate_services`].
///
/// All three are fail-fast preconditions. Per-call provider failures inside
/// a sweep are never surfaced: they degrade result completeness, not the
/// correctness of the response envelope.
#[derive(Debug, Error)]
pub enum LocateError {
    /// Caller-supplied coordinates outside valid range; no provider calls
    /// were made.
    #[error("invalid coordinates: lat {lat}, lng {lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },

    /// The geocoder found no match for the supplied postal code / city /
    /// landmark / address.
    #[error("no location found for \"{input}\"")]
    LocationNotFound { input: String },

    /// The place-search provider has no usable credentials. Checked before
    /// any sweep is attempted.
    #[error("place-search provider is not configured")]
    ProviderUnconfigured,
}

/// The engine's entry point: a provider plus sweep configuration.
///
/// Generic over the provider seam so tests run against in-process stubs.
/// Holds no per-request state; concurrent requests each own their sweep
/// accumulator and can share one `ServiceLocator` freely.
pub struct ServiceLocator<P> {
    provider: P,
    config: SweepConfig,
}

impl ServiceLocator<PlacesClient> {
    /// Builds a production locator from application config.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::ProviderUnconfigured`] when no API key is
    /// configured or the HTTP client cannot be constructed — either way the
    /// provider is unusable and no search should be attempted.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, LocateError> {
        let api_key = cfg
            .places_api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(LocateError::ProviderUnconfigured)?;

        let provider = PlacesClient::with_base_url(
            api_key,
            cfg.request_timeout_secs,
            &cfg.user_agent,
            &cfg.places_base_url,
        )
        .map_err(|e| {
            tracing::error!(error = %e, "failed to construct provider client");
            LocateError::ProviderUnconfigured
        })?;

        let config = SweepConfig {
            nearby_delay: Duration::from_millis(cfg.nearby_delay_ms),
            text_delay: Duration::from_millis(cfg.text_delay_ms),
            ..SweepConfig::default()
        };

        Ok(Self::new(provider, config))
    }
}

impl<P: Geocoder + PlaceSearch> ServiceLocator<P> {
    pub fn new(provider: P, config: SweepConfig) -> Self {
        Self { provider, config }
    }

    /// Finds nearby service providers for a piece of equipment.
    ///
    /// The requested radius is clamped into `[MIN_RADIUS_M, MAX_RADIUS_M]`.
    /// An unknown equipment category falls back to generic repair-service
    /// keywords; a sweep in which every provider call fails still succeeds
    /// with an empty, hinted result.
    ///
    /// # Errors
    ///
    /// Only the fail-fast preconditions documented on [`LocateError`].
    pub async fn locate_services(
        &self,
        query: &LocationQuery,
        equipment_category: &str,
        radius_m: u32,
    ) -> Result<SearchResult, LocateError> {
        let origin = resolver::resolve(&self.provider, query).await?;
        let radius = radius_m.clamp(MIN_RADIUS_M, MAX_RADIUS_M);
        let keywords = keywords::keywords_for(equipment_category);

        tracing::info!(
            category = equipment_category,
            radius,
            origin = %origin.source_label,
            "starting provider sweep"
        );

        let outcome =
            sweep::run_sweep(&self.provider, &self.config, &origin, keywords, radius).await;

        let unique = dedupe::dedupe(outcome.candidates);
        let places = score::rank(unique, &origin);

        let hint = places.is_empty().then(|| {
            "No service providers found in this area. Try a larger search radius.".to_owned()
        });

        Ok(SearchResult {
            places,
            location: origin,
            keywords_used: outcome.keywords_used,
            strategies_used: outcome.strategies_used,
            hint,
        })
    }
}
