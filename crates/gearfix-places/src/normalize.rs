//! Normalization of raw provider records into [`gearfix_core::CandidatePlace`].
//!
//! This is the single point where loosely-typed external data is validated
//! and defaulted (records on the wire have almost every field optional);
//! downstream code never handles optional geometry or missing ids.

use gearfix_core::{BusinessStatus, CandidatePlace};

use crate::types::RawPlace;

/// Normalizes one raw provider record.
///
/// Returns `None` for records that cannot identify a real place: a missing
/// `place_id` (no stable identity, so deduplication would be impossible) or
/// missing geometry (no way to compute distance). Everything else is
/// defaulted: the address falls back from `vicinity` to `formatted_address`
/// to empty, the rating is clamped into [0, 5], and unrecognized business
/// statuses become [`BusinessStatus::Unknown`].
#[must_use]
pub fn normalize_place(raw: RawPlace) -> Option<CandidatePlace> {
    let provider_id = raw.place_id.filter(|id| !id.is_empty())?;
    let location = raw.geometry?.location;

    let address = raw
        .vicinity
        .or(raw.formatted_address)
        .unwrap_or_default();

    Some(CandidatePlace {
        provider_id,
        name: raw.name.unwrap_or_default(),
        address,
        latitude: location.lat,
        longitude: location.lng,
        rating: raw.rating.map(|r| r.clamp(0.0, 5.0)),
        review_count: raw.user_ratings_total.unwrap_or(0),
        open_now: raw.opening_hours.and_then(|h| h.open_now),
        business_status: BusinessStatus::from_provider(raw.business_status.as_deref()),
        photo_refs: raw
            .photos
            .into_iter()
            .filter_map(|p| p.photo_reference)
            .collect(),
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
