//! Illustrative word-level changes for inline highlight rendering.
//!
//! These are not derived by diffing the row text: each recognized edit
//! category maps to fixed before/after substitutions from a static
//! association table. The [`WordChangeStrategy`] trait keeps the table
//! swappable for a real diff engine later without touching callers.

use lazy_static::lazy_static;
use regex::Regex;
use review_types::{CsvRow, WordChange, WordChangeCategory};

/// Split a comma-separated edit-type tag list into trimmed tags.
pub fn extract_edit_types(edit_type: &str) -> Vec<String> {
    edit_type.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Source of word-level changes for a row.
pub trait WordChangeStrategy {
    fn word_changes(&self, row: &CsvRow) -> Vec<WordChange>;
}

fn change(original: &str, corrected: &str, category: WordChangeCategory) -> WordChange {
    WordChange {
        original: original.to_string(),
        corrected: corrected.to_string(),
        category,
    }
}

lazy_static! {
    /// Edit-type tag → illustrative substitution. A tag may contribute
    /// more than one entry; table order is output order.
    static ref STATIC_TABLE: Vec<(&'static str, WordChange)> = vec![
        ("Grammar", change("advane", "advanced", WordChangeCategory::Grammar)),
        ("Clarity", change("safety", "security", WordChangeCategory::Clarity)),
        ("Technical", change("system", "systems", WordChangeCategory::Technical)),
        ("Internal Consistency", change("6th", "sixth", WordChangeCategory::Grammar)),
        (
            "Professionalism & Presentation",
            change("covering", "comprising", WordChangeCategory::Clarity),
        ),
        ("Formatting", change("on site", "on-site", WordChangeCategory::Formatting)),
        ("Grammar", change("The is a", "The property is an", WordChangeCategory::Grammar)),
        (
            "Technical Accuracy",
            change("Air Handling units", "Air Handling Units", WordChangeCategory::Technical),
        ),
    ];
}

/// Tag-driven static substitutions.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTableStrategy;

impl WordChangeStrategy for StaticTableStrategy {
    fn word_changes(&self, row: &CsvRow) -> Vec<WordChange> {
        let tags = extract_edit_types(&row.edit_type);
        STATIC_TABLE
            .iter()
            .filter(|(tag, _)| tags.iter().any(|t| t == tag))
            .map(|(_, change)| change.clone())
            .collect()
    }
}

fn color_class(category: WordChangeCategory) -> &'static str {
    match category {
        WordChangeCategory::Grammar => "text-red-600",
        WordChangeCategory::Technical => "text-blue-600",
        WordChangeCategory::Clarity => "text-purple-600",
        WordChangeCategory::Formatting => "text-indigo-600",
        WordChangeCategory::Other => "text-cyan-600",
    }
}

/// Render the original text with inline strikethrough-plus-correction
/// markup for each word change. Longest originals are replaced first so
/// a shorter substitution cannot clobber part of a longer match; matching
/// is case-insensitive.
pub fn render_inline(original_text: &str, changes: &[WordChange]) -> String {
    let mut sorted: Vec<&WordChange> = changes.iter().collect();
    sorted.sort_by(|a, b| b.original.len().cmp(&a.original.len()));

    let mut result = original_text.to_string();
    for change in sorted {
        let pattern = match Regex::new(&format!("(?i){}", regex::escape(&change.original))) {
            Ok(pattern) => pattern,
            Err(_) => continue,
        };
        let color = color_class(change.category);
        let markup = format!(
            "<span class=\"line-through {color}\">{}</span> <span class=\"font-medium {color}\">{}</span>",
            change.original, change.corrected
        );
        result = pattern
            .replace_all(&result, regex::NoExpand(&markup))
            .into_owned();
    }
    result
}
