//! Row-descriptor assembly: outline records to renderer input.

use sprintchart_core::{ChartConfig, ChartRow, OutlineRecord};

use crate::timeline;

/// Converts a record sequence into ordered chart rows.
///
/// One row per record, in source order. Activity rows carry the display
/// label (`"{ordinal} {title} {week_label}"`) and the bucket-index set
/// computed from the raw timeline; activities without a parseable
/// timeline get an empty set and simply render without a bar.
///
/// # Examples
///
/// ```
/// use sprintchart_core::{ActivityRecord, ChartConfig, ChartRow, OutlineRecord};
/// use sprintchart_extract::chart_rows;
///
/// let records = vec![OutlineRecord::Activity(
///     ActivityRecord::new("1.", "Do thing").with_timeline("Weeks 1-3 (~10 days)", "(W1-W3)"),
/// )];
/// let rows = chart_rows(&records, &ChartConfig::default());
/// assert_eq!(
///     rows[0],
///     ChartRow::Activity {
///         label: "1. Do thing (W1-W3)".to_string(),
///         buckets: vec![0, 1],
///     }
/// );
/// ```
pub fn chart_rows(records: &[OutlineRecord], config: &ChartConfig) -> Vec<ChartRow> {
    records
        .iter()
        .map(|record| match record {
            OutlineRecord::EngineerHeader { name } => ChartRow::EngineerHeader {
                label: name.clone(),
            },
            OutlineRecord::PhaseHeader { name, .. } => ChartRow::PhaseHeader {
                label: name.clone(),
            },
            OutlineRecord::Activity(activity) => ChartRow::Activity {
                label: activity.display_label(),
                buckets: timeline::map_to_buckets(&activity.raw_timeline, config),
            },
        })
        .collect()
}
