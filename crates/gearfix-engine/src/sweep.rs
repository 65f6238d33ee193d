//! The multi-radius × multi-keyword × dual-mode provider sweep.
//!
//! One sweep is the whole fan-out for a single request: a nearby-search
//! pass over every keyword × ladder radius, then a text-search pass over
//! the most specific keywords. Calls are strictly sequential with a fixed
//! delay between them — the provider's rate limit is the scarce resource,
//! and staying under it matters more than wall-clock latency. Per-call
//! failures are logged and contribute nothing; only the complete absence of
//! provider credentials can fail a search, and that is checked before any
//! sweep starts.

use std::time::Duration;

use gearfix_core::{CandidatePlace, ResolvedLocation};

use crate::provider::PlaceSearch;

/// Hard upper bound the provider enforces on a single search radius.
pub const PROVIDER_MAX_RADIUS_M: u32 = 50_000;

/// Fractions of the requested radius swept, smallest first. Small radii go
/// first because the provider truncates each response to one page: a single
/// large-radius call under-samples dense nearby clusters, while the small
/// rungs surface close matches before the wide rungs fill in the rest.
const RADIUS_LADDER_FACTORS: [f64; 4] = [0.3, 0.6, 1.0, 1.5];

/// Rate-limiting and shaping knobs for one sweep. The delays are first-class
/// configuration so tests can zero them and operators can tune them against
/// provider quota.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Pause between consecutive nearby-search calls.
    pub nearby_delay: Duration,
    /// Pause between consecutive text-search calls. Text search is more
    /// aggressively rate-limited by the provider, so this is larger.
    pub text_delay: Duration,
    /// How many of the most specific keywords the text pass uses.
    pub text_keyword_limit: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            nearby_delay: Duration::from_millis(50),
            text_delay: Duration::from_millis(150),
            text_keyword_limit: 6,
        }
    }
}

/// Everything one sweep produced, before deduplication.
#[derive(Debug)]
pub struct SweepOutcome {
    pub candidates: Vec<CandidatePlace>,
    pub keywords_used: usize,
    /// Which strategies contributed candidates: `"nearby"`, `"text"`, plus
    /// `"multi_radius"` whenever the ladder had more than one rung.
    pub strategies_used: Vec<String>,
}

/// Computes the graduated radius ladder for a requested radius.
///
/// `[0.3r, 0.6r, r, 1.5r]`, each rung rounded and capped at
/// [`PROVIDER_MAX_RADIUS_M`]; rungs that collapse to the same value after
/// capping are merged. Always non-empty and ascending.
#[must_use]
pub fn radius_ladder(requested_m: u32) -> Vec<u32> {
    let mut ladder = Vec::with_capacity(RADIUS_LADDER_FACTORS.len());
    for factor in RADIUS_LADDER_FACTORS {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rung = (f64::from(requested_m) * factor).round() as u32;
        let rung = rung.clamp(1, PROVIDER_MAX_RADIUS_M);
        if ladder.last() != Some(&rung) {
            ladder.push(rung);
        }
    }
    ladder
}

/// Runs the full dual-mode sweep for one request.
///
/// The accumulator is owned by this call; nothing is shared across
/// concurrent requests. Deduplication happens downstream — this function is
/// pure fan-out and collection.
pub async fn run_sweep<P: PlaceSearch>(
    provider: &P,
    config: &SweepConfig,
    origin: &ResolvedLocation,
    keywords: &[&str],
    requested_radius_m: u32,
) -> SweepOutcome {
    let ladder = radius_ladder(requested_radius_m);
    let mut candidates: Vec<CandidatePlace> = Vec::new();
    let mut nearby_hits = 0usize;
    let mut text_hits = 0usize;
    let mut first_call = true;

    for keyword in keywords {
        for &radius in &ladder {
            if !first_call && !config.nearby_delay.is_zero() {
                tokio::time::sleep(config.nearby_delay).await;
            }
            first_call = false;

            match provider
                .nearby_search(origin.latitude, origin.longitude, radius, keyword)
                .await
            {
                Ok(found) => {
                    tracing::debug!(keyword, radius, count = found.len(), "nearby search");
                    nearby_hits += found.len();
                    candidates.extend(found);
                }
                Err(e) => {
                    tracing::warn!(keyword, radius, error = %e, "nearby search failed, continuing sweep");
                }
            }
        }
    }

    // Text search casts a wider net per call, so the smallest rung is
    // redundant and only the most specific keywords are worth the quota.
    let text_ladder = if ladder.len() > 1 { &ladder[1..] } else { &ladder[..] };
    let mut first_text_call = true;
    for keyword in keywords.iter().take(config.text_keyword_limit) {
        for &radius in text_ladder {
            if !first_text_call && !config.text_delay.is_zero() {
                tokio::time::sleep(config.text_delay).await;
            }
            first_text_call = false;

            match provider
                .text_search(keyword, origin.latitude, origin.longitude, radius)
                .await
            {
                Ok(found) => {
                    tracing::debug!(keyword, radius, count = found.len(), "text search");
                    text_hits += found.len();
                    candidates.extend(found);
                }
                Err(e) => {
                    tracing::warn!(keyword, radius, error = %e, "text search failed, continuing sweep");
                }
            }
        }
    }

    let mut strategies_used = Vec::new();
    if nearby_hits > 0 {
        strategies_used.push("nearby".to_owned());
    }
    if text_hits > 0 {
        strategies_used.push("text".to_owned());
    }
    if ladder.len() > 1 {
        strategies_used.push("multi_radius".to_owned());
    }

    tracing::info!(
        total = candidates.len(),
        keywords = keywords.len(),
        rungs = ladder.len(),
        "sweep complete"
    );

    SweepOutcome {
        candidates,
        keywords_used: keywords.len(),
        strategies_used,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_graduated_for_typical_radius() {
        assert_eq!(radius_ladder(5000), vec![1500, 3000, 5000, 7500]);
    }

    #[test]
    fn ladder_caps_every_rung_at_provider_limit() {
        for requested in [40_000, 50_000, 200_000, u32::MAX] {
            for rung in radius_ladder(requested) {
                assert!(rung <= PROVIDER_MAX_RADIUS_M, "requested {requested}");
            }
        }
    }

    #[test]
    fn ladder_merges_capped_rungs() {
        // 1.0r and 1.5r both cap to 50 km.
        assert_eq!(radius_ladder(50_000), vec![15_000, 30_000, 50_000]);
        // Everything caps: a single rung remains.
        assert_eq!(radius_ladder(u32::MAX).len(), 1);
    }

    #[test]
    fn ladder_is_ascending() {
        for requested in [1000, 5000, 33_333, 50_000] {
            let ladder = radius_ladder(requested);
            assert!(ladder.windows(2).all(|w| w[0] < w[1]), "{ladder:?}");
        }
    }

    #[test]
    fn tiny_radius_never_produces_zero_rung() {
        assert!(radius_ladder(1).iter().all(|&r| r >= 1));
    }

    /// Provider stub that always answers instantly with nothing.
    struct SilentProvider;

    impl PlaceSearch for SilentProvider {
        async fn nearby_search(
            &self,
            _lat: f64,
            _lng: f64,
            _radius_m: u32,
            _keyword: &str,
        ) -> Result<Vec<CandidatePlace>, gearfix_places::PlacesError> {
            Ok(vec![])
        }

        async fn text_search(
            &self,
            _query: &str,
            _lat: f64,
            _lng: f64,
            _radius_m: u32,
        ) -> Result<Vec<CandidatePlace>, gearfix_places::PlacesError> {
            Ok(vec![])
        }
    }

    #[tokio::test(start_paused = true)]
    async fn delays_apply_between_calls_in_both_passes() {
        let config = SweepConfig {
            nearby_delay: Duration::from_millis(50),
            text_delay: Duration::from_millis(150),
            text_keyword_limit: 6,
        };
        let origin = ResolvedLocation {
            latitude: 23.0225,
            longitude: 72.5714,
            source_label: "coordinates: 23.0225, 72.5714".to_owned(),
        };
        let keywords = ["laptop repair service", "computer repair shop"];

        let start = tokio::time::Instant::now();
        run_sweep(&SilentProvider, &config, &origin, &keywords, 5000).await;

        // Neither pass sleeps before its first call, only between calls:
        // nearby is 2 keywords x 4 rungs = 8 calls -> 7 gaps of 50 ms,
        // text is 2 keywords x 3 rungs = 6 calls -> 5 gaps of 150 ms.
        assert_eq!(
            start.elapsed(),
            Duration::from_millis(7 * 50 + 5 * 150)
        );
    }
}
