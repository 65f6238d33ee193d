//! Provider API response types.
//!
//! All types model the JSON shapes returned by the place-search provider.
//! Every response carries a top-level `"status"` string: `"OK"` and
//! `"ZERO_RESULTS"` are success, anything else is an API-level error.
//! Raw records are loosely typed on the wire, so nearly every field is
//! optional here; [`crate::normalize`] is the single place that turns them
//! into fully-defaulted domain values.

use serde::Deserialize;

/// Envelope for nearby-search and text-search responses.
#[derive(Debug, Deserialize)]
pub struct PlacesResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<RawPlace>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One raw place record as returned by nearby or text search.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Short address, present on nearby-search results.
    #[serde(default)]
    pub vicinity: Option<String>,
    /// Full address, present on text-search results.
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub photo_reference: Option<String>,
}

/// Envelope for geocoding responses.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

/// A successful geocoding answer, reduced to what the resolver needs.
#[derive(Debug, Clone)]
pub struct GeocodeHit {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
}
