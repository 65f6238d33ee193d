//! Domain types shared across the gearfix crates.
//!
//! Everything here is created fresh per search request and discarded with
//! the response; nothing is persisted.

use serde::{Deserialize, Serialize};

/// An ambiguous location input as supplied by the caller.
///
/// Exactly one variant is populated per request. Everything except
/// `Coordinates` requires a geocoding round-trip before it can be searched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationQuery {
    Coordinates { lat: f64, lng: f64 },
    PostalCode(String),
    City(String),
    Landmark(String),
    Address(String),
}

/// A canonical search origin derived from a [`LocationQuery`].
///
/// `source_label` records how the location was obtained (e.g.
/// `"pincode: 380001 (Ahmedabad, Gujarat, India)"`) for user display and
/// auditability. Coordinates are always within valid range once this type
/// exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub source_label: String,
}

/// Operating status reported by the place-search provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessStatus {
    Operational,
    ClosedTemporarily,
    ClosedPermanently,
    Unknown,
}

impl BusinessStatus {
    /// Maps a provider status string to a variant. Unrecognized or missing
    /// strings become [`BusinessStatus::Unknown`].
    #[must_use]
    pub fn from_provider(s: Option<&str>) -> Self {
        match s {
            Some("OPERATIONAL") => Self::Operational,
            Some("CLOSED_TEMPORARILY") => Self::ClosedTemporarily,
            Some("CLOSED_PERMANENTLY") => Self::ClosedPermanently,
            _ => Self::Unknown,
        }
    }
}

/// A place record normalized from the provider wire format.
///
/// Identity is `provider_id`: two candidates with the same id observed by
/// different sweep calls are the same business and collapse to one during
/// deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatePlace {
    pub provider_id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Star rating in [0, 5], when the provider reports one.
    pub rating: Option<f64>,
    pub review_count: u32,
    /// `None` when the provider has no opening-hours data.
    pub open_now: Option<bool>,
    pub business_status: BusinessStatus,
    pub photo_refs: Vec<String>,
}

/// A candidate annotated with distance from the search origin and its
/// composite relevance score. Derived per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPlace {
    #[serde(flatten)]
    pub place: CandidatePlace,
    pub distance_km: f64,
    pub relevance_score: f64,
}

/// The final ranked answer for one search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Ranked descending by `relevance_score`, at most 60 entries.
    pub places: Vec<ScoredPlace>,
    pub location: ResolvedLocation,
    /// How many distinct keywords the sweep used.
    pub keywords_used: usize,
    /// Which search strategies contributed: `"nearby"`, `"text"`,
    /// `"multi_radius"`.
    pub strategies_used: Vec<String>,
    /// User-facing suggestion when `places` is empty (e.g. broaden the
    /// radius). Zero results is a successful outcome, not an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
