//! Plan outline parser.
//!
//! Classifies each line of a plan document against the three heading
//! shapes in use (engineer, phase, activity) plus the timeline bullet,
//! in priority order — the first matching rule wins and at most one rule
//! fires per line. Parent linkage is carried by two mutable context
//! fields (current engineer, current phase) updated as headers go by.
//!
//! Timeline annotations sit on their own bullet lines below the activity
//! they describe, so the parser scans a bounded window forward from each
//! activity header. Canonical lookahead policy: up to [`LOOKAHEAD_WINDOW`]
//! lines, skipping one optional `**Activities:**` label line. An
//! annotation binds to at most one activity; annotations with no open
//! activity in range are silently ignored.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use sprintchart_core::{ActivityRecord, OutlineRecord};

use crate::normalize::normalize_plan_text;
use crate::timeline;

/// Lines examined after an activity header when hunting for its timeline
/// annotation.
pub const LOOKAHEAD_WINDOW: usize = 3;

/// Regex patterns for the plan line shapes.
static PATTERNS: LazyLock<PlanPatterns> = LazyLock::new(PlanPatterns::new);

struct PlanPatterns {
    // ## Engineer 1: Central UAT Test Case Identification & Migration
    engineer_header: Regex,
    // **Phase 1: Discovery, Analysis & Planning (Est. Months 1-2)**
    phase_header: Regex,
    // 1.  **Deep Dive into Existing UAT Processes & Test Assets**
    activity_header: Regex,
    // *   **Timeline/Effort:** Weeks 1-3 (~10-12 person-days)
    timeline_bullet: Regex,
    // *   **Activities:**
    activities_label: Regex,
}

impl PlanPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure
        // indicates a programmer error in the pattern, not a runtime
        // condition.
        Self {
            engineer_header: Regex::new(r"^## (Engineer \d+:.*)")
                .expect("static regex must compile"),
            phase_header: Regex::new(
                r"^\*\*Phase \d+: (.*?)(?:\s*\((?:Est\.|Estimated)?\s*Months\s*\d+-\d+\))?\*\*\s*$",
            )
            .expect("static regex must compile"),
            activity_header: Regex::new(r"^(\d+\.)\s*\*\*(.*)\*\*")
                .expect("static regex must compile"),
            timeline_bullet: Regex::new(
                r"^\*\s*(?:\*\*)?Timeline/Effort:(?:\*\*)?\s*(Weeks\s*\d+-\d+.*)$",
            )
            .expect("static regex must compile"),
            activities_label: Regex::new(r"^\*\s*\*\*Activities:\*\*")
                .expect("static regex must compile"),
        }
    }
}

/// Line-coverage diagnostics for a single extraction run.
#[derive(Debug, Clone, Default)]
pub struct ParseDiagnostics {
    /// Non-blank lines in the normalized input.
    pub relevant_lines: usize,
    /// Lines claimed by a recognition rule or an associated annotation.
    pub recognized_lines: usize,
}

impl ParseDiagnostics {
    /// Fraction of relevant lines the parser accounted for.
    pub fn coverage(&self) -> f64 {
        if self.relevant_lines == 0 {
            return 0.0;
        }
        self.recognized_lines as f64 / self.relevant_lines as f64
    }
}

/// A timeline annotation located in the lookahead window.
struct TimelineHit {
    raw: String,
    line_index: usize,
    label_index: Option<usize>,
}

/// Parser for plan outline documents.
///
/// Pure transformation of text to records: malformed lines are skipped,
/// never raised. Running the parser twice on the same text yields
/// structurally identical record sequences.
pub struct OutlineParser {
    raw_text: String,
    warnings: Vec<String>,
    diagnostics: ParseDiagnostics,
}

impl OutlineParser {
    /// Creates a parser for the given plan text.
    pub fn new(text: &str) -> Self {
        Self {
            raw_text: text.to_string(),
            warnings: Vec::new(),
            diagnostics: ParseDiagnostics::default(),
        }
    }

    /// Extracts the ordered outline record sequence.
    ///
    /// Empty input yields an empty sequence, not an error.
    pub fn extract(&mut self) -> Vec<OutlineRecord> {
        let normalized = normalize_plan_text(&self.raw_text);
        let lines: Vec<&str> = normalized.lines().collect();

        let mut records = Vec::new();
        let mut current_engineer: Option<String> = None;
        let mut current_phase: Option<String> = None;
        let mut recognized: HashSet<usize> = HashSet::new();

        for (index, line) in lines.iter().enumerate() {
            if let Some(caps) = PATTERNS.engineer_header.captures(line) {
                let name = caps[1].trim().to_string();
                debug!(line = index, engineer = %name, "engineer header");
                recognized.insert(index);
                current_engineer = Some(name.clone());
                current_phase = None;
                records.push(OutlineRecord::EngineerHeader { name });
                continue;
            }

            if let Some(caps) = PATTERNS.phase_header.captures(line) {
                let name = caps[1].trim().to_string();
                debug!(line = index, phase = %name, "phase header");
                recognized.insert(index);
                current_phase = Some(name.clone());
                records.push(OutlineRecord::PhaseHeader {
                    name,
                    engineer: current_engineer.clone(),
                });
                continue;
            }

            if let Some(caps) = PATTERNS.activity_header.captures(line) {
                let ordinal = caps[1].to_string();
                let title = caps[2].trim().to_string();
                debug!(line = index, ordinal = %ordinal, title = %title, "activity header");
                recognized.insert(index);

                if current_engineer.is_none() {
                    self.warnings.push(format!(
                        "activity '{ordinal} {title}' precedes any engineer header"
                    ));
                }

                let mut activity = ActivityRecord::new(&ordinal, &title)
                    .with_parents(current_engineer.as_deref(), current_phase.as_deref());

                if let Some(hit) = Self::find_timeline(&lines, index) {
                    debug!(line = hit.line_index, timeline = %hit.raw, "timeline annotation");
                    recognized.insert(hit.line_index);
                    if let Some(label_index) = hit.label_index {
                        recognized.insert(label_index);
                    }
                    activity.week_label = timeline::week_label(&hit.raw);
                    activity.raw_timeline = hit.raw;
                }

                records.push(OutlineRecord::Activity(activity));
                continue;
            }

            // Any other line: ignored; context is unchanged.
        }

        self.diagnostics = ParseDiagnostics {
            relevant_lines: lines.iter().filter(|line| !line.trim().is_empty()).count(),
            recognized_lines: recognized.len(),
        };

        records
    }

    /// Scans the bounded window after an activity header for its timeline
    /// annotation.
    ///
    /// The scan stops early at the next structural header: an annotation
    /// past that point belongs to a different activity (or to nothing).
    fn find_timeline(lines: &[&str], activity_index: usize) -> Option<TimelineHit> {
        let mut label_index = None;

        for offset in 1..=LOOKAHEAD_WINDOW {
            let candidate = lines.get(activity_index + offset)?;
            let trimmed = candidate.trim();
            if trimmed.is_empty() {
                continue;
            }

            if label_index.is_none() && PATTERNS.activities_label.is_match(trimmed) {
                label_index = Some(activity_index + offset);
                continue;
            }

            if let Some(caps) = PATTERNS.timeline_bullet.captures(trimmed) {
                return Some(TimelineHit {
                    raw: caps[1].trim().to_string(),
                    line_index: activity_index + offset,
                    label_index,
                });
            }

            if PATTERNS.engineer_header.is_match(trimmed)
                || PATTERNS.phase_header.is_match(trimmed)
                || PATTERNS.activity_header.is_match(trimmed)
            {
                return None;
            }
        }

        None
    }

    /// Warnings collected during extraction.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Line-coverage diagnostics for the last extraction.
    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }
}
