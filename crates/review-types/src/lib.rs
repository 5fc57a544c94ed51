pub mod diagnostics;
pub mod status;
pub mod types;

pub use diagnostics::{Diagnostic, DiagnosticLevel};
pub use status::{JobStatus, ParseJobStatusError};
pub use types::{
    AiSummaryVersions, CsvRow, ExecutiveSummary, ParsedData, RagRow, RagStatus, ReviewReport,
    WordChange, WordChangeCategory,
};
