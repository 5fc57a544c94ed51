//! Row classification: routing parsed rows into suggestion buckets.
//!
//! Every row lands in exactly one of three buckets (RAG assessments, tone
//! changes, content edits) or is discarded. Source order is preserved
//! within each bucket.

use review_types::{CsvRow, Diagnostic, ParsedData, RagRow, RagStatus};

use crate::patterns::{
    match_rag_rule, CONTENT_CATEGORIES, COST_RULES, LENIENT_MARKER, RAG_MARKER, SAFETY_RULES,
    TEMPLATE_LEAK_PHRASES, TONE_PREFIX,
};

/// The classification outcome for a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClass {
    Rag(Box<RagRow>),
    Tone(CsvRow),
    Content(CsvRow),
    /// Excluded from all buckets; recorded as a diagnostic only.
    Discarded(CsvRow),
}

/// Classify one validated row. First match wins: RAG marker, then Tone
/// prefix, then the content-validity filter.
pub fn classify_row(row: &CsvRow) -> RowClass {
    if row.edit_type.to_lowercase().contains(RAG_MARKER) {
        RowClass::Rag(Box::new(build_rag_row(row)))
    } else if row.edit_type.starts_with(TONE_PREFIX) {
        RowClass::Tone(row.clone())
    } else if is_valid_content_row(row) {
        RowClass::Content(row.clone())
    } else {
        RowClass::Discarded(row.clone())
    }
}

/// Classify rows in order, collecting the three buckets and the
/// diagnostics describing what happened to each row.
pub fn classify_rows(rows: Vec<CsvRow>) -> (ParsedData, Vec<Diagnostic>) {
    let mut data = ParsedData::default();
    let mut diagnostics = Vec::new();

    for row in rows {
        match classify_row(&row) {
            RowClass::Rag(rag) => {
                tracing::debug!(system = %rag.system_name, edit_type = %rag.row.edit_type, "RAG row parsed");
                diagnostics.push(Diagnostic::debug(format!(
                    "RAG suggestion for {:?}",
                    rag.system_name
                )));
                data.rag_suggestions.push(*rag);
            }
            RowClass::Tone(row) => {
                tracing::debug!(section = %row.section_name, "tone change row");
                data.tone_changes.push(row);
            }
            RowClass::Content(row) => {
                tracing::debug!(section = %row.section_name, edit_type = %row.edit_type, "content recommendation row");
                diagnostics.push(Diagnostic::debug(format!(
                    "content recommendation in {:?}",
                    row.section_name
                )));
                data.content_edits.push(row);
            }
            RowClass::Discarded(row) => {
                tracing::warn!(section = %row.section_name, edit_type = %row.edit_type, "discarding row that failed content validation");
                diagnostics.push(Diagnostic::warn(format!(
                    "discarded row in {:?}: edit type {:?} failed validation",
                    row.section_name, row.edit_type
                )));
            }
        }
    }

    diagnostics.push(Diagnostic::info(format!(
        "classified {} RAG, {} tone, {} content rows",
        data.rag_suggestions.len(),
        data.tone_changes.len(),
        data.content_edits.len()
    )));

    (data, diagnostics)
}

/// Derive the structured RAG fields from the row's free text. Only the
/// side named by the edit type (lenient or critical) is derived from the
/// row; the opposing side takes fixed placeholder defaults until paired
/// assessment rows exist upstream.
fn build_rag_row(row: &CsvRow) -> RagRow {
    let revision_lower = row.proposed_revision.to_lowercase();
    let is_lenient = row.edit_type.to_lowercase().contains(LENIENT_MARKER);

    let system_name = extract_system_name(row);
    let safety = match_rag_rule(&revision_lower, SAFETY_RULES).unwrap_or(RagStatus::Amber);
    let cost = match_rag_rule(&revision_lower, COST_RULES).unwrap_or(RagStatus::Amber);

    if is_lenient {
        RagRow {
            row: row.clone(),
            system_name,
            critical_safety: RagStatus::Amber,
            critical_cost: RagStatus::Amber,
            lenient_safety: safety,
            lenient_cost: cost,
            critical_justification: None,
            lenient_justification: Some(row.justification.clone()),
        }
    } else {
        RagRow {
            row: row.clone(),
            system_name,
            critical_safety: safety,
            critical_cost: cost,
            lenient_safety: RagStatus::Green,
            lenient_cost: RagStatus::Amber,
            critical_justification: Some(row.justification.clone()),
            lenient_justification: None,
        }
    }
}

/// The system name comes from the second comma component of the section
/// label, falling back to the whole label; the text before the first
/// colon of the proposed revision overrides both when it names a system.
fn extract_system_name(row: &CsvRow) -> String {
    let mut name = row
        .section_name
        .split(',')
        .nth(1)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .unwrap_or(&row.section_name)
        .to_string();

    if let Some((prefix, _)) = row.proposed_revision.split_once(':') {
        let prefix = prefix.trim();
        if !prefix.is_empty() && prefix != "-" {
            name = prefix.to_string();
        }
    }

    name
}

/// Content rows must carry a comma-separated category list naming at
/// least one recognized category, and none of the free-text fields may
/// contain template leakage.
fn is_valid_content_row(row: &CsvRow) -> bool {
    let mandatory_present = [
        &row.section_name,
        &row.original_text,
        &row.proposed_revision,
        &row.justification,
        &row.edit_type,
    ]
    .iter()
    .all(|field| !field.trim().is_empty());

    let has_category_list = row.edit_type.contains(',');
    let has_known_category = CONTENT_CATEGORIES
        .iter()
        .any(|category| row.edit_type.contains(category));

    let has_template_leak = [&row.original_text, &row.proposed_revision, &row.justification]
        .iter()
        .any(|field| {
            let lower = field.to_lowercase();
            TEMPLATE_LEAK_PHRASES
                .iter()
                .any(|phrase| lower.contains(phrase))
        });

    mandatory_present && has_category_list && has_known_category && !has_template_leak
}
