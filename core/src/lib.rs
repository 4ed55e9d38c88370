//! Core types for sprint plan extraction and charting.
//!
//! This crate defines the data model shared by the extraction, rendering,
//! and CLI crates:
//!
//! - [`OutlineRecord`] — one classified unit of a plan document: an
//!   engineer header, a phase header, or an [`ActivityRecord`].
//! - [`ChartConfig`] — sprint grid geometry (bucket width, horizon) with
//!   documented defaults and validation.
//! - [`ChartRow`] — the ordered row descriptors handed to the grid
//!   renderer.
//!
//! # Example
//!
//! ```
//! use sprintchart_core::*;
//!
//! let config = ChartConfig::default();
//! config.validate().unwrap();
//!
//! let activity = ActivityRecord::new("1.", "Deep dive into UAT processes")
//!     .with_parents(Some("Engineer 1: Migration"), Some("Discovery"))
//!     .with_timeline("Weeks 1-3 (~10 days)", "(W1-W3)");
//!
//! let record = OutlineRecord::Activity(activity);
//! assert!(record.is_activity());
//! assert_eq!(config.sprint_label(0), "Sprint 1 (W1-W2)");
//! ```

mod config;
mod rows;
mod types;

pub use config::{
    ChartConfig, ConfigError, DEFAULT_BUCKET_WIDTH_WEEKS, DEFAULT_HORIZON_BUCKETS,
};
pub use rows::ChartRow;
pub use types::{ActivityRecord, OutlineRecord};
