//! Outline record definitions for plan document structure.
//!
//! This module defines the core data model produced by the outline
//! extractor. The types are designed for serialization with [`serde`] and
//! round-trip through JSON and YAML.

use serde::{Deserialize, Serialize};

/// One classified unit of a plan document.
///
/// The extractor walks the source text line by line and emits records in
/// source order. Order is the only sequencing signal: an activity belongs
/// to the nearest preceding engineer and phase headers in the sequence.
///
/// # Examples
///
/// ```
/// use sprintchart_core::{ActivityRecord, OutlineRecord};
///
/// let records = vec![
///     OutlineRecord::EngineerHeader {
///         name: "Engineer 1: Migration".to_string(),
///     },
///     OutlineRecord::Activity(ActivityRecord::new("1.", "Inventory test assets")),
/// ];
/// assert_eq!(records.iter().filter(|r| r.is_activity()).count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutlineRecord {
    /// Top-level grouping (`## Engineer N: <title>`).
    ///
    /// Starts a new engineer context and resets the phase context.
    EngineerHeader {
        /// Full matched title, including the "Engineer N:" prefix.
        name: String,
    },
    /// Mid-level grouping (`**Phase N: <title>**`) under the current engineer.
    PhaseHeader {
        /// Phase title with any "(Months X-Y)" qualifier stripped.
        name: String,
        /// Nearest preceding engineer header, if any.
        engineer: Option<String>,
    },
    /// A numbered activity line with an optional timeline annotation.
    Activity(ActivityRecord),
}

impl OutlineRecord {
    /// Returns `true` for [`OutlineRecord::Activity`] records.
    pub fn is_activity(&self) -> bool {
        matches!(self, Self::Activity(_))
    }

    /// Returns the inner activity record, if this is one.
    pub fn as_activity(&self) -> Option<&ActivityRecord> {
        match self {
            Self::Activity(activity) => Some(activity),
            _ => None,
        }
    }
}

/// A single plan activity.
///
/// `raw_timeline` holds the unparsed `"Weeks X-Y ..."` annotation text when
/// one was associated with the activity. An empty `raw_timeline` is a valid
/// state, not an error: the activity simply gets no chart bar.
///
/// # Examples
///
/// ```
/// use sprintchart_core::ActivityRecord;
///
/// let activity = ActivityRecord::new("1.", "Deep dive into UAT processes")
///     .with_timeline("Weeks 1-3 (~10 days)", "(W1-W3)");
/// assert_eq!(activity.display_label(), "1. Deep dive into UAT processes (W1-W3)");
///
/// let bare = ActivityRecord::new("2.", "Write report");
/// assert!(bare.raw_timeline.is_empty());
/// assert_eq!(bare.display_label(), "2. Write report");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Nearest preceding engineer header, if any.
    pub engineer: Option<String>,
    /// Nearest preceding phase header, if any.
    pub phase: Option<String>,
    /// Captured ordinal as written, including the dot (e.g. `"3."`).
    pub ordinal: String,
    /// Activity title without the bold markers.
    pub title: String,
    /// Full matched `"Weeks X-Y ..."` text, or empty when no annotation
    /// was associated with this activity.
    pub raw_timeline: String,
    /// Derived display label (e.g. `"(W7-W10)"`), empty when
    /// `raw_timeline` is empty or carries no parseable week range.
    pub week_label: String,
}

impl ActivityRecord {
    /// Creates an activity with no parents and no timeline.
    pub fn new(ordinal: &str, title: &str) -> Self {
        Self {
            engineer: None,
            phase: None,
            ordinal: ordinal.to_string(),
            title: title.to_string(),
            raw_timeline: String::new(),
            week_label: String::new(),
        }
    }

    /// Sets the parent engineer and phase contexts.
    pub fn with_parents(mut self, engineer: Option<&str>, phase: Option<&str>) -> Self {
        self.engineer = engineer.map(String::from);
        self.phase = phase.map(String::from);
        self
    }

    /// Attaches a timeline annotation and its derived week label.
    pub fn with_timeline(mut self, raw_timeline: &str, week_label: &str) -> Self {
        self.raw_timeline = raw_timeline.to_string();
        self.week_label = week_label.to_string();
        self
    }

    /// Whether a timeline annotation was associated with this activity.
    pub fn has_timeline(&self) -> bool {
        !self.raw_timeline.is_empty()
    }

    /// Display label for chart rows: ordinal, title, and week label when
    /// one was derived.
    pub fn display_label(&self) -> String {
        if self.week_label.is_empty() {
            format!("{} {}", self.ordinal, self.title)
        } else {
            format!("{} {} {}", self.ordinal, self.title, self.week_label)
        }
    }
}
