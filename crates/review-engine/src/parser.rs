//! Quote-aware CSV row parser.
//!
//! The review export is semi-structured: comma-delimited, optionally
//! double-quote-enclosed fields with backslash escaping, 5 or 6 columns
//! in a fixed order. Parsing is strictly line-by-line; embedded newlines
//! inside quoted fields are not supported, and a line with unbalanced
//! quotes simply ends with the line.

use review_types::{CsvRow, Diagnostic};

use crate::patterns::{HEADER_MARKER, PLACEHOLDER_SENTINEL};

/// Parse a raw CSV blob into cleaned, validated rows. Lines that fail the
/// field-count gate or mandatory-field validation are dropped with a
/// diagnostic, never surfaced as errors.
pub fn parse_raw_csv(csv_text: &str) -> (Vec<CsvRow>, Vec<Diagnostic>) {
    let mut rows = Vec::new();
    let mut diagnostics = Vec::new();

    let lines: Vec<(usize, &str)> = csv_text
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();

    // Skip the header line if the export included one
    let start = match lines.first() {
        Some((_, first)) if first.contains(HEADER_MARKER) => 1,
        _ => 0,
    };

    for &(index, line) in &lines[start..] {
        let line_no = index + 1;
        let fields: Vec<String> = split_fields(line)
            .iter()
            .map(|field| clean_field(field))
            .collect();

        if fields.len() < 5 {
            tracing::debug!(line = line_no, fields = fields.len(), "line has too few fields");
            diagnostics.push(
                Diagnostic::debug(format!(
                    "line has {} fields, expected at least 5",
                    fields.len()
                ))
                .at_line(line_no),
            );
            continue;
        }

        let row = CsvRow {
            section_name: fields[0].clone(),
            original_text: fields[1].clone(),
            proposed_revision: fields[2].clone(),
            justification: fields[3].clone(),
            edit_type: fields[4].clone(),
            diff_output: fields.get(5).filter(|f| !f.is_empty()).cloned(),
        };

        match validate_row(&row) {
            Ok(()) => rows.push(row),
            Err(reason) => {
                tracing::warn!(line = line_no, %reason, "dropping malformed row");
                diagnostics
                    .push(Diagnostic::warn(format!("dropped row: {reason}")).at_line(line_no));
            }
        }
    }

    diagnostics.push(Diagnostic::info(format!(
        "parsed {} raw CSV lines, kept {} valid rows",
        lines.len().saturating_sub(start),
        rows.len()
    )));

    (rows, diagnostics)
}

/// Split one line into raw fields, honoring quoting and backslash escapes.
/// Unescaped quote characters toggle quoting and are not emitted.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escape_next = false;

    for ch in line.chars() {
        if escape_next {
            current.push(ch);
            escape_next = false;
            continue;
        }
        match ch {
            '\\' => escape_next = true,
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Strip one outer quote layer, collapse doubled quotes, trim whitespace.
/// The outer layer is only removed as a pair; an unpaired quote is field
/// content and stays.
fn clean_field(raw: &str) -> String {
    let unquoted = raw
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(raw);
    unquoted.replace("\"\"", "\"").trim().to_string()
}

/// All five mandatory fields must be non-empty and free of placeholder
/// leakage from the upstream generator.
fn validate_row(row: &CsvRow) -> Result<(), String> {
    let mandatory = [
        ("section_name", &row.section_name),
        ("original_text", &row.original_text),
        ("proposed_revision", &row.proposed_revision),
        ("justification", &row.justification),
        ("edit_type", &row.edit_type),
    ];

    for (name, value) in mandatory {
        if value.is_empty() {
            return Err(format!("{name} is empty"));
        }
        if value.contains(PLACEHOLDER_SENTINEL) {
            return Err(format!("{name} contains placeholder text"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn parse(text: &str) -> Vec<CsvRow> {
        parse_raw_csv(text).0
    }

    #[test]
    fn test_escaped_quote_round_trips() {
        let rows = parse(r#""He said \"hi\"",original,revision,because,"Grammar, Clarity""#);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].section_name, r#"He said "hi""#);
    }

    #[test]
    fn test_trailing_content_quote_is_not_stripped() {
        // A field legitimately ending in an escaped quote keeps it; only
        // a paired outer layer is removed.
        let rows = parse(r#"said \"hi\",original,revision,because,"Grammar, Clarity""#);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].section_name, r#"said "hi""#);
    }

    #[test]
    fn test_quoted_commas_stay_in_field() {
        let rows = parse(r#""Page 4, Introduction (Section 1)",a,b,c,"Grammar, Clarity""#);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].section_name, "Page 4, Introduction (Section 1)");
        assert_eq!(rows[0].edit_type, "Grammar, Clarity");
    }

    #[test]
    fn test_line_with_fewer_than_five_fields_is_dropped() {
        let (rows, diagnostics) = parse_raw_csv("only,four,fields,here");
        assert!(rows.is_empty());
        assert!(diagnostics
            .iter()
            .any(|d| d.message.contains("expected at least 5")));
    }

    #[test]
    fn test_header_line_is_skipped() {
        let text = "section_name,original_text,proposed_revision,justification,edit_type\n\
                    Page 4,a,b,c,Tone of voice";
        let rows = parse(text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].section_name, "Page 4");
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let text = "\n\nPage 4,a,b,c,Tone\n   \nPage 5,a,b,c,Tone\n";
        assert_eq!(parse(text).len(), 2);
    }

    #[test]
    fn test_empty_mandatory_field_drops_row() {
        let (rows, diagnostics) = parse_raw_csv("Page 4,,b,c,Tone");
        assert!(rows.is_empty());
        assert!(diagnostics
            .iter()
            .any(|d| d.message.contains("original_text is empty")));
    }

    #[test]
    fn test_placeholder_sentinel_drops_row() {
        let rows = parse("Page 4,undefined text,b,c,Tone");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_sixth_field_becomes_diff_output() {
        let rows = parse("Page 4,a,b,c,Tone,<span>diff</span>");
        assert_eq!(rows[0].diff_output.as_deref(), Some("<span>diff</span>"));

        let rows = parse("Page 4,a,b,c,Tone");
        assert_eq!(rows[0].diff_output, None);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let rows = parse("  Page 4 , a ,\tb , c , Tone ");
        assert_eq!(rows[0].section_name, "Page 4");
        assert_eq!(rows[0].edit_type, "Tone");
    }

    proptest! {
        #[test]
        fn prop_parse_is_idempotent(input in ".{0,200}") {
            let (first, _) = parse_raw_csv(&input);
            let (second, _) = parse_raw_csv(&input);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_kept_rows_have_nonempty_mandatory_fields(input in ".{0,200}") {
            for row in parse_raw_csv(&input).0 {
                prop_assert!(!row.section_name.is_empty());
                prop_assert!(!row.original_text.is_empty());
                prop_assert!(!row.proposed_revision.is_empty());
                prop_assert!(!row.justification.is_empty());
                prop_assert!(!row.edit_type.is_empty());
            }
        }
    }
}
