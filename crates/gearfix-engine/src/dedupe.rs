//! Candidate deduplication and permanent-closure filtering.

use std::collections::HashSet;

use gearfix_core::{BusinessStatus, CandidatePlace};

/// Collapses sweep output to one candidate per `provider_id`.
///
/// First occurrence wins: every sweep call queries the same underlying
/// provider index, so later duplicates carry no new information.
/// Permanently closed businesses are dropped outright, however many calls
/// surfaced them.
#[must_use]
pub fn dedupe(candidates: Vec<CandidatePlace>) -> Vec<CandidatePlace> {
    let mut seen: HashSet<String> = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|c| c.business_status != BusinessStatus::ClosedPermanently)
        .filter(|c| seen.insert(c.provider_id.clone()))
        .collect()
}
