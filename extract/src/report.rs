//! Structured reporting for outline extraction runs.

use serde::{Deserialize, Serialize};

use sprintchart_core::OutlineRecord;

use crate::parser::ParseDiagnostics;

/// Summary of one extraction run.
///
/// Informational only: extraction is best-effort and the report never
/// gates output. A plan full of unrecognized prose still extracts fine;
/// the coverage numbers just show how much of the document the parser
/// accounted for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// RFC 3339 timestamp for when the report was generated.
    pub generated_at: String,
    pub engineer_headers: usize,
    pub phase_headers: usize,
    pub activities: usize,
    /// Activities that had a timeline annotation associated with them.
    pub activities_with_timeline: usize,
    /// Non-blank input lines.
    pub relevant_lines: usize,
    /// Lines claimed by a recognition rule or an associated annotation.
    pub recognized_lines: usize,
    pub warnings: Vec<String>,
}

impl ExtractionReport {
    /// Builds a report from a record sequence plus parser diagnostics.
    pub fn from_records(
        records: &[OutlineRecord],
        diagnostics: &ParseDiagnostics,
        warnings: Vec<String>,
    ) -> Self {
        let mut engineer_headers = 0;
        let mut phase_headers = 0;
        let mut activities = 0;
        let mut activities_with_timeline = 0;

        for record in records {
            match record {
                OutlineRecord::EngineerHeader { .. } => engineer_headers += 1,
                OutlineRecord::PhaseHeader { .. } => phase_headers += 1,
                OutlineRecord::Activity(activity) => {
                    activities += 1;
                    if activity.has_timeline() {
                        activities_with_timeline += 1;
                    }
                }
            }
        }

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            engineer_headers,
            phase_headers,
            activities,
            activities_with_timeline,
            relevant_lines: diagnostics.relevant_lines,
            recognized_lines: diagnostics.recognized_lines,
            warnings,
        }
    }

    /// Fraction of relevant lines the parser accounted for.
    pub fn coverage(&self) -> f64 {
        if self.relevant_lines == 0 {
            return 0.0;
        }
        self.recognized_lines as f64 / self.relevant_lines as f64
    }
}

/// A record sequence paired with its extraction report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRun {
    pub records: Vec<OutlineRecord>,
    pub report: ExtractionReport,
}
