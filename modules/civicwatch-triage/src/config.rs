use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::moderation::DEFAULT_TOXICITY_THRESHOLD;
use crate::proximity::DEFAULT_MAX_DISTANCE_KM;
use crate::similarity::DEFAULT_SIMILARITY_THRESHOLD;

/// Tuning knobs for the triage heuristics, overridable per deployment.
///
/// Only numeric thresholds are tunable. Keyword lists are immutable constants
/// owned by each component, never process-wide mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageTuning {
    /// Minimum cosine similarity for a candidate to count as a duplicate.
    pub similarity_threshold: f64,
    /// Distinct flagged terms required to mark a comment toxic.
    pub toxicity_threshold: usize,
    /// Maximum distance between two reports describing the same problem.
    pub max_duplicate_distance_km: f64,
}

impl Default for TriageTuning {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            toxicity_threshold: DEFAULT_TOXICITY_THRESHOLD,
            max_duplicate_distance_km: DEFAULT_MAX_DISTANCE_KM,
        }
    }
}

impl TriageTuning {
    /// Load tuning from `CIVICWATCH_*` environment variables, falling back to
    /// the component defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            similarity_threshold: env_or(
                "CIVICWATCH_SIMILARITY_THRESHOLD",
                DEFAULT_SIMILARITY_THRESHOLD,
            )?,
            toxicity_threshold: env_or(
                "CIVICWATCH_TOXICITY_THRESHOLD",
                DEFAULT_TOXICITY_THRESHOLD,
            )?,
            max_duplicate_distance_km: env_or(
                "CIVICWATCH_MAX_DUPLICATE_DISTANCE_KM",
                DEFAULT_MAX_DISTANCE_KM,
            )?,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
