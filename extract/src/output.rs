//! Output formatting for records, chart rows, and extraction runs.

use sprintchart_core::{ChartConfig, ChartRow, OutlineRecord};

use crate::report::ExtractionRun;

/// Supported output formats.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

/// Formats a record sequence in the requested output format.
pub fn format_records(records: &[OutlineRecord], format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(records)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(records).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(records_to_table(records)),
    }
}

/// Formats an extraction run (records plus report) in the requested format.
pub fn format_run(run: &ExtractionRun, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(run).map_err(|e| format!("JSON serialization failed: {e}"))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(run).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => {
            let mut out = records_to_table(&run.records);
            out.push('\n');
            out.push_str(&format!(
                "Records: {} engineer(s), {} phase(s), {} activity(ies) ({} with timeline)\n",
                run.report.engineer_headers,
                run.report.phase_headers,
                run.report.activities,
                run.report.activities_with_timeline,
            ));
            out.push_str(&format!(
                "Coverage: {}/{} relevant line(s) recognized ({:.0}%)\n",
                run.report.recognized_lines,
                run.report.relevant_lines,
                run.report.coverage() * 100.0,
            ));
            for warning in &run.report.warnings {
                out.push_str(&format!("Warning: {warning}\n"));
            }
            Ok(out)
        }
    }
}

/// Formats chart rows in the requested output format.
///
/// The table format prints a text preview of the grid: one character per
/// bucket column, `#` for a highlighted cell.
pub fn format_rows(
    rows: &[ChartRow],
    config: &ChartConfig,
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(rows).map_err(|e| format!("JSON serialization failed: {e}"))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(rows).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Table => Ok(rows_to_table(rows, config)),
    }
}

fn records_to_table(records: &[OutlineRecord]) -> String {
    let mut out = String::new();

    for record in records {
        match record {
            OutlineRecord::EngineerHeader { name } => {
                out.push_str(&format!("{name}\n"));
            }
            OutlineRecord::PhaseHeader { name, .. } => {
                out.push_str(&format!("  {name}\n"));
            }
            OutlineRecord::Activity(activity) => {
                if activity.has_timeline() {
                    out.push_str(&format!(
                        "    {} {}  [{}]\n",
                        activity.ordinal, activity.title, activity.raw_timeline
                    ));
                } else {
                    out.push_str(&format!("    {} {}\n", activity.ordinal, activity.title));
                }
            }
        }
    }

    out
}

fn rows_to_table(rows: &[ChartRow], config: &ChartConfig) -> String {
    let mut out = String::new();
    let label_width = rows
        .iter()
        .filter(|row| matches!(row, ChartRow::Activity { .. }))
        .map(|row| row.label().chars().count())
        .max()
        .unwrap_or(8);

    for row in rows {
        match row {
            ChartRow::EngineerHeader { label } => {
                out.push_str(&format!("{label}\n"));
            }
            ChartRow::PhaseHeader { label } => {
                out.push_str(&format!("  {label}\n"));
            }
            ChartRow::Activity { label, buckets } => {
                let mut cells = String::new();
                for bucket in 0..config.horizon_buckets as usize {
                    cells.push(if buckets.contains(&bucket) { '#' } else { '.' });
                }
                out.push_str(&format!("    {label:<label_width$}  {cells}\n"));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{extract_outline, extract_outline_with_report, rows::chart_rows};

    const PLAN: &str = "\
## Engineer 1: X
**Phase 1: Plan**
1.  **Do thing**
*   **Timeline/Effort:** Weeks 1-3 (~10 days)
2.  **Write report**
";

    #[test]
    fn test_format_records_json() {
        let records = extract_outline(PLAN);
        let json = format_records(&records, OutputFormat::Json).unwrap();
        assert!(json.contains("\"type\": \"engineer_header\""));
        assert!(json.contains("\"raw_timeline\": \"Weeks 1-3 (~10 days)\""));
    }

    #[test]
    fn test_format_records_yaml() {
        let records = extract_outline(PLAN);
        let yaml = format_records(&records, OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("type: engineer_header"));
        assert!(yaml.contains("week_label: (W1-W3)"));
    }

    #[test]
    fn test_format_records_table() {
        let records = extract_outline(PLAN);
        let table = format_records(&records, OutputFormat::Table).unwrap();
        assert!(table.contains("Engineer 1: X"));
        assert!(table.contains("  Plan"));
        assert!(table.contains("    1. Do thing  [Weeks 1-3 (~10 days)]"));
        assert!(table.contains("    2. Write report"));
    }

    #[test]
    fn test_format_run_table_includes_summary() {
        let run = extract_outline_with_report(PLAN);
        let table = format_run(&run, OutputFormat::Table).unwrap();
        assert!(table.contains("1 engineer(s), 1 phase(s), 2 activity(ies) (1 with timeline)"));
    }

    #[test]
    fn test_format_rows_table_draws_grid_preview() {
        let config = ChartConfig::default();
        let rows = chart_rows(&extract_outline(PLAN), &config);
        let table = format_rows(&rows, &config, OutputFormat::Table).unwrap();
        assert!(table.contains("##.........."));
        assert!(table.contains("............"));
    }

    #[test]
    fn test_format_rows_json_roundtrip() {
        let config = ChartConfig::default();
        let rows = chart_rows(&extract_outline(PLAN), &config);
        let json = format_rows(&rows, &config, OutputFormat::Json).unwrap();
        let back: Vec<ChartRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rows);
    }
}
