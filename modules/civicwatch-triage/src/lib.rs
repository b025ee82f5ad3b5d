//! Triage heuristics for citizen issue reports.
//!
//! Four stateless components assist intake: duplicate detection (text
//! similarity plus geographic proximity), comment moderation, and priority
//! suggestion. Every operation is a pure function over its inputs; callers
//! own persistence, candidate filtering, and what to do with the advice.

pub mod config;
pub mod dedup;
pub mod moderation;
pub mod priority;
pub mod proximity;
pub mod similarity;

pub use config::TriageTuning;
pub use dedup::find_nearby_duplicates;
pub use moderation::{is_toxic, redact};
pub use priority::suggest_priority;
pub use proximity::within_distance;
pub use similarity::{find_similar, CandidateReport, SimilarityMatch};
