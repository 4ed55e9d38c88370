//! Offline sprint plan extraction.
//!
//! This crate turns a markdown-like plan document into the structured
//! data the chart renderer consumes:
//!
//! - [`extract_outline`] — classify lines into an ordered
//!   [`OutlineRecord`] sequence (engineer headers, phase headers,
//!   activities with raw timeline annotations).
//! - [`map_to_buckets`] — map one `"Weeks X-Y ..."` annotation onto
//!   sprint bucket indices within the configured horizon.
//! - [`chart_rows`] — assemble the row descriptors handed to the grid
//!   renderer.
//!
//! Extraction is best-effort by design: malformed lines and annotations
//! are skipped, never raised. A malformed entry in a large plan degrades
//! to "no chart bar for that item", not an aborted run.
//!
//! # Example
//!
//! ```
//! use sprintchart_core::ChartConfig;
//! use sprintchart_extract::{chart_rows, extract_outline};
//!
//! let plan = "## Engineer 1: Migration\n\
//!     **Phase 1: Discovery (Est. Months 1-2)**\n\
//!     1.  **Inventory existing test assets**\n\
//!     *   **Timeline/Effort:** Weeks 1-3 (~10 days)\n";
//!
//! let records = extract_outline(plan);
//! assert_eq!(records.len(), 3);
//!
//! let rows = chart_rows(&records, &ChartConfig::default());
//! assert_eq!(rows[2].buckets(), &[0, 1]);
//! ```
//!
//! [`OutlineRecord`]: sprintchart_core::OutlineRecord

pub mod normalize;
pub mod output;
pub mod parser;
pub mod report;
pub mod rows;
pub mod timeline;

use sprintchart_core::OutlineRecord;

pub use parser::{LOOKAHEAD_WINDOW, OutlineParser, ParseDiagnostics};
pub use report::{ExtractionReport, ExtractionRun};
pub use rows::chart_rows;
pub use timeline::{map_to_buckets, week_label, week_range};

/// Extracts the ordered outline record sequence from plan text.
///
/// This is the primary entry point. Empty input yields an empty
/// sequence; no input ever raises.
///
/// # Examples
///
/// ```
/// use sprintchart_extract::extract_outline;
///
/// let records = extract_outline("## Engineer 1: X\n1.  **Do thing**\n");
/// assert_eq!(records.len(), 2);
/// assert!(extract_outline("").is_empty());
/// ```
pub fn extract_outline(text: &str) -> Vec<OutlineRecord> {
    OutlineParser::new(text).extract()
}

/// Extracts the record sequence together with an [`ExtractionReport`].
///
/// The report carries record counts, line coverage, and any warnings —
/// informational only, it never gates output.
///
/// # Examples
///
/// ```
/// use sprintchart_extract::extract_outline_with_report;
///
/// let run = extract_outline_with_report("## Engineer 1: X\n1.  **Do thing**\n");
/// assert_eq!(run.report.activities, 1);
/// assert_eq!(run.report.activities_with_timeline, 0);
/// ```
pub fn extract_outline_with_report(text: &str) -> ExtractionRun {
    let mut parser = OutlineParser::new(text);
    let records = parser.extract();
    let report = ExtractionReport::from_records(
        &records,
        parser.diagnostics(),
        parser.warnings().to_vec(),
    );

    ExtractionRun { records, report }
}
