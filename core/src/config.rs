//! Chart configuration: bucket width and planning horizon.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bucket width: one sprint covers two weeks.
pub const DEFAULT_BUCKET_WIDTH_WEEKS: u32 = 2;

/// Default planning horizon: twelve sprint buckets (24 weeks).
pub const DEFAULT_HORIZON_BUCKETS: u32 = 12;

/// Configuration errors caught before any extraction or rendering runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Bucket width of zero weeks would make every week range unmappable.
    #[error("bucket width must be at least one week")]
    ZeroBucketWidth,
    /// A horizon of zero buckets leaves no columns to chart into.
    #[error("planning horizon must contain at least one bucket")]
    ZeroHorizon,
}

/// Sprint grid geometry: how wide a bucket is and how many buckets the
/// chart covers.
///
/// Weeks are 1-based in plan documents; bucket indices are 0-based. With
/// the defaults (2 weeks per bucket, 12 buckets), the chart covers weeks
/// 1 through 24.
///
/// # Examples
///
/// ```
/// use sprintchart_core::ChartConfig;
///
/// let config = ChartConfig::default();
/// assert_eq!(config.bucket_width_weeks, 2);
/// assert_eq!(config.horizon_buckets, 12);
/// assert_eq!(config.sprint_label(0), "Sprint 1 (W1-W2)");
/// assert_eq!(config.sprint_label(11), "Sprint 12 (W23-W24)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Weeks covered by one bucket column.
    pub bucket_width_weeks: u32,
    /// Number of bucket columns in the chart.
    pub horizon_buckets: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bucket_width_weeks: DEFAULT_BUCKET_WIDTH_WEEKS,
            horizon_buckets: DEFAULT_HORIZON_BUCKETS,
        }
    }
}

impl ChartConfig {
    /// Creates a configuration with explicit geometry.
    pub fn new(bucket_width_weeks: u32, horizon_buckets: u32) -> Self {
        Self {
            bucket_width_weeks,
            horizon_buckets,
        }
    }

    /// Rejects degenerate geometry before any work happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use sprintchart_core::{ChartConfig, ConfigError};
    ///
    /// assert!(ChartConfig::default().validate().is_ok());
    /// assert_eq!(
    ///     ChartConfig::new(0, 12).validate(),
    ///     Err(ConfigError::ZeroBucketWidth)
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket_width_weeks == 0 {
            return Err(ConfigError::ZeroBucketWidth);
        }
        if self.horizon_buckets == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        Ok(())
    }

    /// First and last 1-based week covered by the given bucket.
    pub fn week_span(&self, bucket: usize) -> (u32, u32) {
        let first = self.bucket_width_weeks * bucket as u32 + 1;
        let last = self.bucket_width_weeks * (bucket as u32 + 1);
        (first, last)
    }

    /// Total number of weeks covered by the horizon.
    pub fn horizon_weeks(&self) -> u32 {
        self.bucket_width_weeks * self.horizon_buckets
    }

    /// Column header label for a bucket, e.g. `"Sprint 1 (W1-W2)"`.
    pub fn sprint_label(&self, bucket: usize) -> String {
        let (first, last) = self.week_span(bucket);
        format!("Sprint {} (W{first}-W{last})", bucket + 1)
    }

    /// Labels for every bucket column in order.
    pub fn sprint_labels(&self) -> Vec<String> {
        (0..self.horizon_buckets as usize)
            .map(|bucket| self.sprint_label(bucket))
            .collect()
    }
}
