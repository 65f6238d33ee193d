//! Composite relevance scoring and final ranking.
//!
//! The weights below are design contracts, not per-call tunables: callers
//! get a consistent ranking no matter who asks.

use std::cmp::Ordering;

use gearfix_core::{distance_km, CandidatePlace, ResolvedLocation, ScoredPlace};

/// Maximum number of places in a [`gearfix_core::SearchResult`], applied
/// only after full ranking so truncation never drops a higher-scored
/// candidate in favor of a lower one.
pub const MAX_RESULTS: usize = 60;

const RATING_WEIGHT: f64 = 40.0;
const REVIEW_CAP: f64 = 25.0;
const DISTANCE_PENALTY_CAP: f64 = 30.0;
const OPEN_NOW_BONUS: f64 = 10.0;
const PHOTO_BONUS: f64 = 5.0;

/// Computes the composite relevance score for one candidate.
///
/// - rating contributes `(rating / 5) * 40` when present;
/// - review volume contributes `min(reviews / 10, 25)`;
/// - distance subtracts `min(km / 2, 30)` — capped so a distant but
///   excellent provider is never zeroed out entirely;
/// - `+10` when known to be open now, `+5` when any photo exists.
#[must_use]
pub fn relevance_score(place: &CandidatePlace, dist_km: f64) -> f64 {
    let mut score = 0.0;
    if let Some(rating) = place.rating {
        score += (rating / 5.0) * RATING_WEIGHT;
    }
    score += (f64::from(place.review_count) / 10.0).min(REVIEW_CAP);
    score -= (dist_km / 2.0).min(DISTANCE_PENALTY_CAP);
    if place.open_now == Some(true) {
        score += OPEN_NOW_BONUS;
    }
    if !place.photo_refs.is_empty() {
        score += PHOTO_BONUS;
    }
    score
}

/// Annotates each candidate with distance and score, then returns the top
/// [`MAX_RESULTS`] ordered descending by score.
///
/// The sort is stable, so exact score ties keep insertion order — the
/// business meaning of an exact tie is inconsequential.
#[must_use]
pub fn rank(candidates: Vec<CandidatePlace>, origin: &ResolvedLocation) -> Vec<ScoredPlace> {
    let mut scored: Vec<ScoredPlace> = candidates
        .into_iter()
        .map(|place| {
            let dist = distance_km(
                origin.latitude,
                origin.longitude,
                place.latitude,
                place.longitude,
            );
            let score = relevance_score(&place, dist);
            ScoredPlace {
                place,
                distance_km: dist,
                relevance_score: score,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.relevance_score
            .partial_cmp(&a.relevance_score)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(MAX_RESULTS);
    scored
}
