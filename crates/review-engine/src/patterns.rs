//! Phrase tables driving row classification.
//!
//! Classification decisions are made against these declarative tables
//! rather than ad-hoc substring chains, so every recognized phrase and
//! its outcome is visible in one place.

use review_types::RagStatus;

/// Substring identifying the optional CSV header line.
pub const HEADER_MARKER: &str = "section_name";

/// Marker phrase (matched against the lowercased edit type) identifying
/// RAG assessment rows.
pub const RAG_MARKER: &str = "rag suggestion";

/// Prefix identifying tone-of-voice rows.
pub const TONE_PREFIX: &str = "Tone";

/// Marker selecting the lenient severity variant of a RAG row; its
/// absence means critical.
pub const LENIENT_MARKER: &str = "lenient";

/// Literal substring left behind when an upstream template failed to
/// substitute a value.
pub const PLACEHOLDER_SENTINEL: &str = "undefined";

/// Template leakage phrases (matched case-insensitively) that mark a row
/// as generation noise rather than a real suggestion.
pub const TEMPLATE_LEAK_PHRASES: &[&str] = &["this is an example", "your task is to"];

/// Recognized content edit categories. A content row's edit type must
/// mention at least one of these (exact casing, as emitted upstream).
pub const CONTENT_CATEGORIES: &[&str] = &[
    "Grammar",
    "Clarity",
    "Formatting",
    "Professionalism",
    "Technical",
    "Consistency",
    "Risk",
];

/// Assessment-change phrases mapped to the safety rating they set.
/// Scanned in order against the lowercased proposed revision.
pub const SAFETY_RULES: &[(&str, RagStatus)] = &[
    ("safety change to green", RagStatus::Green),
    ("safety change to red", RagStatus::Red),
    ("safety change to amber", RagStatus::Amber),
];

/// Assessment-change phrases mapped to the operation/cost rating they
/// set. Both the long and short phrasings appear in real exports.
pub const COST_RULES: &[(&str, RagStatus)] = &[
    ("operation / cost change to green", RagStatus::Green),
    ("cost change to green", RagStatus::Green),
    ("operation / cost change to red", RagStatus::Red),
    ("cost change to red", RagStatus::Red),
    ("operation / cost change to amber", RagStatus::Amber),
    ("cost change to amber", RagStatus::Amber),
];

/// Scan a lowercased text against a rule table; first matching phrase wins.
pub fn match_rag_rule(text_lower: &str, rules: &[(&str, RagStatus)]) -> Option<RagStatus> {
    rules
        .iter()
        .find(|(phrase, _)| text_lower.contains(phrase))
        .map(|(_, status)| *status)
}
