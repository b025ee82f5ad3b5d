//! Nearby-duplicate scan for new reports.
//!
//! Composes text similarity with the proximity gate: a candidate counts as a
//! nearby duplicate only when its text scores above the similarity threshold
//! AND both reports carry coordinates within the distance limit. Candidate
//! pre-filtering (same category, open status) is the caller's job.

use tracing::debug;

use civicwatch_common::{GeoPoint, ReportText};

use crate::config::TriageTuning;
use crate::proximity::within_distance;
use crate::similarity::{find_similar, CandidateReport, SimilarityMatch};

/// Scan `candidates` for reports that look like the same problem as a new
/// report filed at `location`.
///
/// A report without coordinates yields no nearby duplicates: text similarity
/// alone is not enough to warn the submitter. Candidates without coordinates
/// are skipped for the same reason. Survivors keep the descending-score
/// order produced by the similarity scan.
pub fn find_nearby_duplicates(
    report: &ReportText,
    location: Option<GeoPoint>,
    candidates: &[CandidateReport],
    tuning: &TriageTuning,
) -> Vec<SimilarityMatch> {
    let Some(origin) = location else {
        debug!(
            candidates = candidates.len(),
            "report has no coordinates, skipping nearby-duplicate scan"
        );
        return Vec::new();
    };

    let matches = find_similar(
        &report.full_text(),
        candidates,
        tuning.similarity_threshold,
    );

    let nearby: Vec<SimilarityMatch> = matches
        .into_iter()
        .filter(|m| {
            m.candidate
                .location
                .is_some_and(|loc| within_distance(origin, loc, tuning.max_duplicate_distance_km))
        })
        .collect();

    debug!(
        candidates = candidates.len(),
        nearby = nearby.len(),
        "nearby-duplicate scan complete"
    );

    nearby
}
