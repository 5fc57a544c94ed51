//! Core data types for the Technical Due Diligence review pipeline.

use serde::{Deserialize, Serialize};

/// One record from the review CSV export: a proposed document edit or a
/// risk assessment, depending on `edit_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRow {
    pub section_name: String,
    pub original_text: String,
    pub proposed_revision: String,
    pub justification: String,
    pub edit_type: String,
    /// Pre-rendered styled diff markup; absent in earlier schema versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_output: Option<String>,
}

/// Red/Amber/Green tri-state risk rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RagStatus {
    Red,
    Amber,
    Green,
}

impl std::fmt::Display for RagStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Amber => write!(f, "Amber"),
            Self::Green => write!(f, "Green"),
        }
    }
}

/// A risk-assessment row derived from a `CsvRow` classified as a RAG
/// suggestion. Exactly one of the two justifications is populated,
/// matching which severity variant the source row encodes; the opposing
/// side carries placeholder defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagRow {
    #[serde(flatten)]
    pub row: CsvRow,
    pub system_name: String,
    pub critical_safety: RagStatus,
    pub critical_cost: RagStatus,
    pub lenient_safety: RagStatus,
    pub lenient_cost: RagStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_justification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lenient_justification: Option<String>,
}

/// Classification output: three disjoint sequences preserving source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedData {
    pub rag_suggestions: Vec<RagRow>,
    pub tone_changes: Vec<CsvRow>,
    pub content_edits: Vec<CsvRow>,
}

impl ParsedData {
    pub fn is_empty(&self) -> bool {
        self.rag_suggestions.is_empty()
            && self.tone_changes.is_empty()
            && self.content_edits.is_empty()
    }

    /// Total number of rows retained across all three buckets.
    pub fn len(&self) -> usize {
        self.rag_suggestions.len() + self.tone_changes.len() + self.content_edits.len()
    }
}

/// Category of an illustrative word-level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordChangeCategory {
    Grammar,
    Technical,
    Clarity,
    Formatting,
    Other,
}

/// An illustrative before/after word substitution used for inline
/// highlighting. Produced by static table lookup, not by text diffing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordChange {
    pub original: String,
    pub corrected: String,
    pub category: WordChangeCategory,
}

/// The full pipeline output: classified rows plus the diagnostics
/// collected while parsing and classifying them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewReport {
    pub data: ParsedData,
    pub diagnostics: Vec<crate::Diagnostic>,
    pub parsed_at: u64,
}

/// Audience-specific AI rewrites of the executive summary. Empty string
/// when no matching row was present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiSummaryVersions {
    pub concise: String,
    pub buyer: String,
    pub lender: String,
    pub owner: String,
}

/// Executive summary extracted from content rows tagged "Executive Summary".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub original: String,
    pub ai_versions: AiSummaryVersions,
}
