//! Spreadsheet grid renderer for sprint plan charts.
//!
//! Turns the ordered [`ChartRow`] descriptors produced by the extraction
//! side into an `.xlsx` workbook: a header row of sprint columns, merged
//! banner rows for engineers and phases, and one colored cell per
//! highlighted bucket on each activity row. All visual concerns live
//! here; the extraction crates know nothing about rendering.
//!
//! # Example
//!
//! ```
//! use sprintchart_core::{ChartConfig, ChartRow};
//! use sprintchart_render::GridRenderer;
//!
//! let rows = vec![
//!     ChartRow::EngineerHeader { label: "Engineer 1: Migration".to_string() },
//!     ChartRow::Activity {
//!         label: "1. Inventory assets (W1-W3)".to_string(),
//!         buckets: vec![0, 1],
//!     },
//! ];
//!
//! let bytes = GridRenderer::new()
//!     .render_to_bytes(&rows, &ChartConfig::default())
//!     .unwrap();
//! assert_eq!(&bytes[0..2], b"PK");
//! ```

mod error;

use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use sprintchart_core::{ChartConfig, ChartRow};

pub use error::{RenderError, Result};

/// Fill color for the sprint header row.
const HEADER_FILL: u32 = 0x4F81BD;
/// Fill color for highlighted activity cells.
const ACTIVITY_FILL: u32 = 0xB4C6E7;
/// Fill color for engineer banner rows.
const ENGINEER_FILL: u32 = 0x800000;
/// Fill color for phase banner rows.
const PHASE_FILL: u32 = 0x006400;

/// Grid renderer with documented visual defaults.
///
/// The defaults reproduce the reference chart layout: a wide label
/// column, 15-unit sprint columns, and frozen panes below and right of
/// the top-left cell.
#[derive(Debug, Clone)]
pub struct GridRenderer {
    /// Worksheet name.
    pub sheet_name: String,
    /// Width of the activity label column.
    pub label_column_width: f64,
    /// Width of each sprint bucket column.
    pub bucket_column_width: f64,
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self {
            sheet_name: "Sprint Plan".to_string(),
            label_column_width: 95.0,
            bucket_column_width: 15.0,
        }
    }
}

impl GridRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the worksheet name.
    pub fn sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }

    /// Sets the width of the activity label column.
    pub fn label_column_width(mut self, width: f64) -> Self {
        self.label_column_width = width;
        self
    }

    /// Sets the width of each sprint bucket column.
    pub fn bucket_column_width(mut self, width: f64) -> Self {
        self.bucket_column_width = width;
        self
    }

    /// Renders the chart and returns the workbook as bytes.
    ///
    /// Zero rows still produce a valid workbook with the header row: an
    /// empty plan is not an error.
    pub fn render_to_bytes(&self, rows: &[ChartRow], config: &ChartConfig) -> Result<Vec<u8>> {
        config.validate()?;

        let mut workbook = Workbook::new();
        let formats = ChartFormats::new();
        let bucket_count = config.horizon_buckets as u16;

        let sheet = workbook.add_worksheet();
        sheet.set_name(&self.sheet_name)?;

        // Header row: label column plus one column per sprint bucket.
        sheet.write_with_format(0, 0, "Activity / Task (Est. Timeline)", &formats.header)?;
        sheet.set_column_width(0, self.label_column_width)?;
        for (bucket, label) in config.sprint_labels().iter().enumerate() {
            let col = bucket as u16 + 1;
            sheet.write_with_format(0, col, label, &formats.header)?;
            sheet.set_column_width(col, self.bucket_column_width)?;
        }
        sheet.set_row_height(0, 40)?;

        let mut row_index: u32 = 1;
        for row in rows {
            match row {
                ChartRow::EngineerHeader { label } => {
                    sheet.merge_range(row_index, 0, row_index, bucket_count, label, &formats.engineer)?;
                    sheet.set_row_height(row_index, 20)?;
                }
                ChartRow::PhaseHeader { label } => {
                    sheet.merge_range(row_index, 0, row_index, bucket_count, label, &formats.phase)?;
                    sheet.set_row_height(row_index, 18)?;
                }
                ChartRow::Activity { label, buckets } => {
                    sheet.write_with_format(row_index, 0, label, &formats.activity_label)?;
                    for bucket in buckets {
                        if *bucket < bucket_count as usize {
                            sheet.write_blank(row_index, *bucket as u16 + 1, &formats.activity_cell)?;
                        }
                    }
                }
            }
            row_index += 1;
        }

        sheet.set_freeze_panes(1, 1)?;

        let bytes = workbook.save_to_buffer()?;
        Ok(bytes)
    }

    /// Renders the chart and writes the workbook to a file.
    pub fn render_to_file(
        &self,
        rows: &[ChartRow],
        config: &ChartConfig,
        path: &std::path::Path,
    ) -> Result<()> {
        let bytes = self.render_to_bytes(rows, config)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Reusable cell formats for one workbook.
struct ChartFormats {
    header: Format,
    engineer: Format,
    phase: Format,
    activity_label: Format,
    activity_cell: Format,
}

impl ChartFormats {
    fn new() -> Self {
        let header = Format::new()
            .set_bold()
            .set_font_color(0xFFFFFF)
            .set_background_color(HEADER_FILL)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_text_wrap();

        let engineer = Format::new()
            .set_bold()
            .set_font_size(14)
            .set_font_color(0xFFFFFF)
            .set_background_color(ENGINEER_FILL)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        let phase = Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color(0xFFFFFF)
            .set_background_color(PHASE_FILL)
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::VerticalCenter)
            .set_indent(1);

        let activity_label = Format::new()
            .set_text_wrap()
            .set_align(FormatAlign::Top)
            .set_indent(2);

        let activity_cell = Format::new().set_background_color(ACTIVITY_FILL);

        Self {
            header,
            engineer,
            phase,
            activity_label,
            activity_cell,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<ChartRow> {
        vec![
            ChartRow::EngineerHeader {
                label: "Engineer 1: Migration".to_string(),
            },
            ChartRow::PhaseHeader {
                label: "Discovery".to_string(),
            },
            ChartRow::Activity {
                label: "1. Inventory assets (W1-W3)".to_string(),
                buckets: vec![0, 1],
            },
            ChartRow::Activity {
                label: "2. Unscheduled follow-up".to_string(),
                buckets: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_render_produces_xlsx_bytes() {
        let bytes = GridRenderer::new()
            .render_to_bytes(&sample_rows(), &ChartConfig::default())
            .unwrap();
        // XLSX files are ZIP containers and start with the PK magic.
        assert!(bytes.len() > 100);
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_render_empty_rows_yields_header_only_workbook() {
        let bytes = GridRenderer::new()
            .render_to_bytes(&[], &ChartConfig::default())
            .unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_render_rejects_invalid_config() {
        let result =
            GridRenderer::new().render_to_bytes(&sample_rows(), &ChartConfig::new(2, 0));
        assert!(result.is_err());
    }

    #[test]
    fn test_render_ignores_buckets_beyond_horizon() {
        // Bucket sets are already clipped upstream, but a stray index must
        // not panic or write outside the grid.
        let rows = vec![ChartRow::Activity {
            label: "1. Stray".to_string(),
            buckets: vec![0, 50],
        }];
        let bytes = GridRenderer::new()
            .render_to_bytes(&rows, &ChartConfig::default())
            .unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_renderer_builder_options() {
        let renderer = GridRenderer::new()
            .sheet_name("Pilot Gantt (Sprints)")
            .label_column_width(80.0)
            .bucket_column_width(12.0);
        assert_eq!(renderer.sheet_name, "Pilot Gantt (Sprints)");
        assert_eq!(renderer.label_column_width, 80.0);
        assert_eq!(renderer.bucket_column_width, 12.0);

        let bytes = renderer
            .render_to_bytes(&sample_rows(), &ChartConfig::default())
            .unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_render_to_file_writes_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.xlsx");

        GridRenderer::new()
            .render_to_file(&sample_rows(), &ChartConfig::default(), &path)
            .unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }
}
