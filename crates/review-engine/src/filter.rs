//! Page and tag filtering of rows for list rendering.

use review_types::CsvRow;

use crate::word_changes::extract_edit_types;

/// Page filter value meaning "no page restriction".
pub const ALL_PAGES: &str = "All Pages";

/// A view filter over classified rows. The default filter passes
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    /// Selected page label; `None` or [`ALL_PAGES`] disables the page
    /// restriction. Matching is by exact substring of the section label.
    pub page: Option<String>,
    /// Selected edit-type tags; empty disables the tag restriction.
    /// A row passes when any selected tag case-insensitively matches any
    /// of its tags by substring.
    pub tags: Vec<String>,
}

impl RowFilter {
    pub fn matches(&self, row: &CsvRow) -> bool {
        self.matches_page(row) && self.matches_tags(row)
    }

    fn matches_page(&self, row: &CsvRow) -> bool {
        match self.page.as_deref() {
            None | Some(ALL_PAGES) => true,
            Some(page) => row.section_name.contains(page),
        }
    }

    fn matches_tags(&self, row: &CsvRow) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        let row_tags: Vec<String> = extract_edit_types(&row.edit_type)
            .iter()
            .map(|tag| tag.to_lowercase())
            .collect();
        self.tags.iter().any(|selected| {
            let selected = selected.to_lowercase();
            row_tags.iter().any(|tag| tag.contains(&selected))
        })
    }
}

/// Apply a filter to a row sequence, preserving order.
pub fn filter_rows<'a>(rows: &'a [CsvRow], filter: &RowFilter) -> Vec<&'a CsvRow> {
    rows.iter().filter(|row| filter.matches(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(section: &str, edit_type: &str) -> CsvRow {
        CsvRow {
            section_name: section.to_string(),
            original_text: "original".to_string(),
            proposed_revision: "revision".to_string(),
            justification: "because".to_string(),
            edit_type: edit_type.to_string(),
            diff_output: None,
        }
    }

    #[test]
    fn test_default_filter_passes_everything() {
        let rows = vec![row("Page 4, Introduction", "Grammar, Clarity")];
        assert_eq!(filter_rows(&rows, &RowFilter::default()).len(), 1);
    }

    #[test]
    fn test_all_pages_sentinel_disables_page_filter() {
        let rows = vec![row("Page 4, Introduction", "Grammar, Clarity")];
        let filter = RowFilter {
            page: Some(ALL_PAGES.to_string()),
            ..Default::default()
        };
        assert_eq!(filter_rows(&rows, &filter).len(), 1);
    }

    #[test]
    fn test_page_filter_is_exact_substring() {
        let rows = vec![
            row("Page 4, Introduction", "Grammar, Clarity"),
            row("Page 10, Survey Report", "Grammar, Formatting"),
        ];
        let filter = RowFilter {
            page: Some("Page 4".to_string()),
            ..Default::default()
        };
        let matched = filter_rows(&rows, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].section_name, "Page 4, Introduction");
    }

    #[test]
    fn test_tag_filter_is_case_insensitive_substring() {
        let rows = vec![
            row("Page 4", "Grammar, Internal Consistency"),
            row("Page 5", "Formatting, Technical Accuracy"),
        ];
        let filter = RowFilter {
            tags: vec!["consistency".to_string()],
            ..Default::default()
        };
        let matched = filter_rows(&rows, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].section_name, "Page 4");
    }

    #[test]
    fn test_any_selected_tag_suffices() {
        let rows = vec![row("Page 5", "Formatting, Technical Accuracy")];
        let filter = RowFilter {
            tags: vec!["Grammar".to_string(), "Technical".to_string()],
            ..Default::default()
        };
        assert_eq!(filter_rows(&rows, &filter).len(), 1);
    }

    #[test]
    fn test_page_and_tags_combine() {
        let rows = vec![
            row("Page 4, Introduction", "Grammar, Clarity"),
            row("Page 4, Introduction", "Formatting, Technical Accuracy"),
        ];
        let filter = RowFilter {
            page: Some("Page 4".to_string()),
            tags: vec!["clarity".to_string()],
        };
        assert_eq!(filter_rows(&rows, &filter).len(), 1);
    }
}
