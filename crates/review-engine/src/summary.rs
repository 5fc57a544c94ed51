//! Executive summary extraction from classified content rows.
//!
//! The export encodes executive summary variants as ordinary content
//! rows tagged "Executive Summary"; rows additionally tagged "AI" are
//! audience-specific rewrites.

use review_types::{AiSummaryVersions, CsvRow, ExecutiveSummary};

const SUMMARY_MARKERS: &[&str] = &["Executive Summary", "executive summary"];
const AI_MARKERS: &[&str] = &["AI", "ai"];

/// Pull the executive summary and its AI variants out of the content
/// rows. Fields are empty strings when no matching row exists.
pub fn extract_executive_summary(content_rows: &[CsvRow]) -> ExecutiveSummary {
    let summary_rows: Vec<&CsvRow> = content_rows
        .iter()
        .filter(|row| {
            SUMMARY_MARKERS
                .iter()
                .any(|marker| row.edit_type.contains(marker))
        })
        .collect();

    let (ai_rows, original_rows): (Vec<&CsvRow>, Vec<&CsvRow>) = summary_rows
        .iter()
        .copied()
        .partition(|row| AI_MARKERS.iter().any(|marker| row.edit_type.contains(marker)));

    let original = original_rows
        .first()
        .map(|row| row.proposed_revision.clone())
        .unwrap_or_default();

    let find_version = |keywords: &[&str]| -> String {
        ai_rows
            .iter()
            .find(|row| {
                let lower = row.edit_type.to_lowercase();
                keywords.iter().any(|keyword| lower.contains(keyword))
            })
            .map(|row| row.proposed_revision.clone())
            .unwrap_or_default()
    };

    ExecutiveSummary {
        original,
        ai_versions: AiSummaryVersions {
            concise: find_version(&["concise"]),
            buyer: find_version(&["buyer", "acquisition"]),
            lender: find_version(&["lender", "financing"]),
            owner: find_version(&["owner", "management"]),
        },
    }
}
