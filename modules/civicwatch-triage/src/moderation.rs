//! Comment moderation.
//!
//! A fixed blocklist matched as substrings of the lower-cased text, so a term
//! embedded in a longer word still counts. Not an ML model: deterministic,
//! explainable, and cheap enough to run on every submitted comment.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Distinct flagged terms required before a comment is marked toxic.
pub const DEFAULT_TOXICITY_THRESHOLD: usize = 2;

/// Replacement for flagged spans in redacted text.
const MASK: &str = "***";

const FLAGGED_TERMS: &[&str] = &[
    "stupid", "idiot", "dumb", "hate", "kill", "die", "worst",
    "useless", "garbage", "trash", "pathetic", "loser", "fool",
    "damn", "hell", "crap", "suck", "terrible", "horrible",
];

static FLAGGED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FLAGGED_TERMS
        .iter()
        .map(|term| {
            RegexBuilder::new(&regex::escape(term))
                .case_insensitive(true)
                .build()
                .unwrap()
        })
        .collect()
});

/// True when at least `threshold` distinct flagged terms appear in `text`.
/// Presence per term, not occurrence count: "stupid stupid" is one term.
pub fn is_toxic(text: &str, threshold: usize) -> bool {
    let lowered = text.to_lowercase();
    let distinct = FLAGGED_TERMS
        .iter()
        .filter(|term| lowered.contains(*term))
        .count();
    distinct >= threshold
}

/// Mask every occurrence of every flagged term, case-insensitively, leaving
/// surrounding punctuation and whitespace untouched. Redaction is independent
/// of the toxicity threshold: a single flagged term is masked even in text
/// that `is_toxic` would pass.
pub fn redact(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in FLAGGED_PATTERNS.iter() {
        if pattern.is_match(&cleaned) {
            cleaned = pattern.replace_all(&cleaned, MASK).into_owned();
        }
    }
    cleaned
}
