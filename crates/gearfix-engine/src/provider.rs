//! The seam between the search engine and the external provider.
//!
//! The engine is generic over these traits so sweeps and resolution can be
//! exercised with in-process stubs; `PlacesClient` is the production
//! implementation. Both traits normalize at the boundary: the engine only
//! ever sees [`CandidatePlace`], never raw wire records.

use gearfix_core::CandidatePlace;
use gearfix_places::{normalize_place, GeocodeHit, PlacesClient, PlacesError};

/// Resolves a free-text location string to coordinates.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, PlacesError>;
}

/// Issues single nearby/text search calls against the provider.
#[allow(async_fn_in_trait)]
pub trait PlaceSearch {
    async fn nearby_search(
        &self,
        lat: f64,
        lng: f64,
        radius_m: u32,
        keyword: &str,
    ) -> Result<Vec<CandidatePlace>, PlacesError>;

    async fn text_search(
        &self,
        query: &str,
        lat: f64,
        lng: f64,
        radius_m: u32,
    ) -> Result<Vec<CandidatePlace>, PlacesError>;
}

impl Geocoder for PlacesClient {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, PlacesError> {
        PlacesClient::geocode(self, query).await
    }
}

impl PlaceSearch for PlacesClient {
    async fn nearby_search(
        &self,
        lat: f64,
        lng: f64,
        radius_m: u32,
        keyword: &str,
    ) -> Result<Vec<CandidatePlace>, PlacesError> {
        let raw = PlacesClient::nearby_search(self, lat, lng, radius_m, keyword).await?;
        Ok(raw.into_iter().filter_map(normalize_place).collect())
    }

    async fn text_search(
        &self,
        query: &str,
        lat: f64,
        lng: f64,
        radius_m: u32,
    ) -> Result<Vec<CandidatePlace>, PlacesError> {
        let raw = PlacesClient::text_search(self, query, lat, lng, radius_m).await?;
        Ok(raw.into_iter().filter_map(normalize_place).collect())
    }
}
