//! Duplicate detection over report text.
//!
//! Builds a TF-IDF vector space over the new report plus its candidate set
//! and ranks candidates by cosine similarity. Each call builds its own
//! vocabulary and discards it on return; nothing is shared between calls.
//!
//! Cost is O(candidates x vocabulary). Callers keep candidate sets small by
//! pre-filtering to same-category, open-status reports.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use civicwatch_common::{CivicWatchError, GeoPoint};

/// Minimum cosine similarity for a candidate to be reported as a duplicate.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Cap on distinct terms in the vector space. Terms beyond the cap (by corpus
/// frequency) are ignored, bounding cost on large candidate sets.
const MAX_VOCABULARY: usize = 100;

/// Word tokens of two or more characters.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// English stop words stripped before vectorization.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "could", "did", "do", "does", "doing", "down",
    "during", "each", "few", "for", "from", "further", "had", "has", "have",
    "having", "he", "her", "here", "hers", "him", "his", "how", "if", "in",
    "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor",
    "not", "now", "of", "off", "on", "once", "only", "or", "other", "our",
    "out", "over", "own", "same", "she", "should", "so", "some", "such",
    "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very",
    "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "you", "your",
];

/// One existing report to compare against. The id is opaque to the matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateReport {
    pub id: Uuid,
    pub text: String,
    pub location: Option<GeoPoint>,
}

/// A candidate that scored at or above the similarity threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatch {
    pub candidate: CandidateReport,
    pub score: f64,
}

/// Rank `candidates` by textual similarity to `query`.
///
/// Returns only candidates scoring at or above `threshold`, descending by
/// score, ties broken by input order. Vectorization failures (for example a
/// corpus that is entirely stop words) are swallowed and yield an empty
/// result: a failed duplicate scan must never fail the submission it assists.
pub fn find_similar(
    query: &str,
    candidates: &[CandidateReport],
    threshold: f64,
) -> Vec<SimilarityMatch> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let docs: Vec<Vec<String>> = std::iter::once(query)
        .chain(candidates.iter().map(|c| c.text.as_str()))
        .map(tokenize)
        .collect();

    let vectors = match tfidf_vectors(&docs) {
        Ok(vectors) => vectors,
        Err(err) => {
            warn!(%err, "vectorization failed, reporting no duplicates");
            return Vec::new();
        }
    };

    let mut matches: Vec<SimilarityMatch> = candidates
        .iter()
        .zip(&vectors[1..])
        .filter_map(|(candidate, vector)| {
            let score = cosine_similarity(&vectors[0], vector);
            (score >= threshold).then(|| SimilarityMatch {
                candidate: candidate.clone(),
                score,
            })
        })
        .collect();

    // Stable sort: equal scores keep input order.
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        candidates = candidates.len(),
        matches = matches.len(),
        threshold,
        "similarity scan complete"
    );

    matches
}

/// Lower-case word tokens with stop words removed.
fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
        .collect()
}

/// Top terms by total corpus frequency, ties broken lexicographically.
fn build_vocabulary(docs: &[Vec<String>]) -> Vec<String> {
    let mut corpus_counts: HashMap<&str, usize> = HashMap::new();
    for doc in docs {
        for token in doc {
            *corpus_counts.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    let mut terms: Vec<(&str, usize)> = corpus_counts.into_iter().collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    terms.truncate(MAX_VOCABULARY);
    terms.into_iter().map(|(term, _)| term.to_string()).collect()
}

/// TF-IDF vectors for all documents over a shared bounded vocabulary.
/// The first document is the query. Uses smoothed inverse document
/// frequency: idf(t) = ln((1 + n) / (1 + df(t))) + 1.
fn tfidf_vectors(docs: &[Vec<String>]) -> Result<Vec<Vec<f64>>, CivicWatchError> {
    let vocabulary = build_vocabulary(docs);
    if vocabulary.is_empty() {
        return Err(CivicWatchError::Vectorization(
            "vocabulary is empty after stop-word removal".to_string(),
        ));
    }

    let index: HashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, term)| (term.as_str(), i))
        .collect();

    let counts: Vec<HashMap<&str, usize>> = docs
        .iter()
        .map(|doc| {
            let mut c: HashMap<&str, usize> = HashMap::new();
            for token in doc {
                *c.entry(token.as_str()).or_insert(0) += 1;
            }
            c
        })
        .collect();

    let mut doc_frequency = vec![0usize; vocabulary.len()];
    for doc_counts in &counts {
        for term in doc_counts.keys() {
            if let Some(&i) = index.get(term) {
                doc_frequency[i] += 1;
            }
        }
    }

    let n_docs = docs.len() as f64;
    let idf: Vec<f64> = doc_frequency
        .iter()
        .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    Ok(counts
        .iter()
        .map(|doc_counts| {
            vocabulary
                .iter()
                .enumerate()
                .map(|(i, term)| {
                    let tf = doc_counts.get(term.as_str()).copied().unwrap_or(0) as f64;
                    tf * idf[i]
                })
                .collect()
        })
        .collect())
}

fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
