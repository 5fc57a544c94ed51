//! CSV ingestion and classification for Technical Due Diligence review
//! exports.
//!
//! The analysis backend emits proposed document edits and risk
//! assessments as a semi-structured CSV blob. This crate parses that
//! blob into typed rows, routes each row into one of three suggestion
//! buckets (content edits, tone changes, RAG risk assessments), and
//! synthesizes illustrative word-level changes for inline display.

pub mod classify;
pub mod filter;
pub mod parser;
pub mod patterns;
pub mod summary;
pub mod word_changes;

use review_types::{CsvRow, ReviewReport};

/// ReviewEngine entry point
pub struct ReviewEngine;

impl ReviewEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline on a raw CSV blob. Malformed input only
    /// shrinks the output; this never fails.
    pub fn parse_report(&self, csv_text: &str) -> ReviewReport {
        let (rows, mut diagnostics) = parser::parse_raw_csv(csv_text);
        let (data, classify_diagnostics) = classify::classify_rows(rows);
        diagnostics.extend(classify_diagnostics);

        ReviewReport {
            data,
            diagnostics,
            parsed_at: chrono::Utc::now().timestamp() as u64,
        }
    }

    /// Parse raw rows without classifying them (for tooling and testing).
    pub fn parse_rows(&self, csv_text: &str) -> Vec<CsvRow> {
        parser::parse_raw_csv(csv_text).0
    }
}

impl Default for ReviewEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_classifies_mixed_rows() {
        let engine = ReviewEngine::new();
        let csv = "\
            \"Page 4, Introduction\",a,b,c,\"Grammar, Clarity\"\n\
            \"Page 6, Summary\",-,\"Cooling: Safety change to Green\",ok,RAG suggestion (lenient)\n\
            Page 3,a,b,c,Tone of voice\n";
        let report = engine.parse_report(csv);

        assert_eq!(report.data.content_edits.len(), 1);
        assert_eq!(report.data.rag_suggestions.len(), 1);
        assert_eq!(report.data.tone_changes.len(), 1);
    }

    #[test]
    fn test_engine_tolerates_garbage_input() {
        let engine = ReviewEngine::new();
        let report = engine.parse_report("not,csv\n\"unbalanced");
        assert!(report.data.is_empty());
        assert!(!report.diagnostics.is_empty());
    }

    #[test]
    fn test_parse_rows_skips_classification() {
        let engine = ReviewEngine::new();
        let rows = engine.parse_rows("Page 3,a,b,c,Sparkle");
        // The unrecognized edit type survives raw parsing; only the
        // classifier excludes it.
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].edit_type, "Sparkle");
    }
}
