//! Row descriptors: the interface between extraction and the grid renderer.

use serde::{Deserialize, Serialize};

/// One row of the rendered chart.
///
/// The extraction side produces an ordered sequence of these; the renderer
/// is responsible for all visual concerns (fills, merges, column widths).
/// Activity rows carry the ascending, unique set of bucket indices whose
/// cells should be highlighted — an empty set means no chart bar.
///
/// # Examples
///
/// ```
/// use sprintchart_core::ChartRow;
///
/// let row = ChartRow::Activity {
///     label: "1. Do thing (W1-W3)".to_string(),
///     buckets: vec![0, 1],
/// };
/// assert_eq!(row.label(), "1. Do thing (W1-W3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartRow {
    /// Full-width engineer banner row.
    EngineerHeader { label: String },
    /// Full-width phase banner row.
    PhaseHeader { label: String },
    /// Activity row with highlighted bucket columns.
    Activity { label: String, buckets: Vec<usize> },
}

impl ChartRow {
    /// Display label for the first column.
    pub fn label(&self) -> &str {
        match self {
            Self::EngineerHeader { label }
            | Self::PhaseHeader { label }
            | Self::Activity { label, .. } => label,
        }
    }

    /// Bucket indices to highlight; empty for header rows.
    pub fn buckets(&self) -> &[usize] {
        match self {
            Self::Activity { buckets, .. } => buckets,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_rows_have_no_buckets() {
        let row = ChartRow::EngineerHeader {
            label: "Engineer 1: X".to_string(),
        };
        assert!(row.buckets().is_empty());
        assert_eq!(row.label(), "Engineer 1: X");
    }

    #[test]
    fn test_chart_row_serde_kind_tags() {
        let row = ChartRow::Activity {
            label: "1. Do thing".to_string(),
            buckets: vec![0, 1],
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"kind\":\"activity\""));
        assert!(json.contains("\"buckets\":[0,1]"));

        let back: ChartRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
