//! Week-range parsing and bucket mapping.
//!
//! Timeline annotations carry free-form text like
//! `"Weeks 5-8 (~12 person-days, shared with QA)"`. Only the leading week
//! range matters for charting; everything after it is display text. The
//! mapper searches for the range rather than matching the whole string,
//! and degrades to an empty bucket set for anything it cannot read.

use std::sync::LazyLock;

use regex::Regex;
use sprintchart_core::ChartConfig;

/// First `Weeks X-Y` occurrence, searched case-insensitively.
static WEEK_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)weeks\s*(\d+)-(\d+)").expect("static regex must compile")
});

/// Extracts the first week range from a timeline annotation.
///
/// Returns `None` when no `Weeks X-Y` pattern is present or the numbers
/// do not parse. No ordering is enforced here; a reversed range is
/// reported as-is and collapses to nothing in [`map_to_buckets`].
///
/// # Examples
///
/// ```
/// use sprintchart_extract::week_range;
///
/// assert_eq!(week_range("Weeks 1-3 (~10 days)"), Some((1, 3)));
/// assert_eq!(week_range("weeks 7-10, stretch goal"), Some((7, 10)));
/// assert_eq!(week_range("ongoing"), None);
/// assert_eq!(week_range(""), None);
/// ```
pub fn week_range(raw_timeline: &str) -> Option<(u32, u32)> {
    let caps = WEEK_RANGE_RE.captures(raw_timeline)?;
    let start = caps[1].parse().ok()?;
    let end = caps[2].parse().ok()?;
    Some((start, end))
}

/// Derives the display label for a timeline annotation, e.g. `"(W1-W3)"`.
///
/// Empty when the annotation carries no parseable week range.
pub fn week_label(raw_timeline: &str) -> String {
    match week_range(raw_timeline) {
        Some((start, end)) => format!("(W{start}-W{end})"),
        None => String::new(),
    }
}

/// Maps a timeline annotation onto bucket indices within the horizon.
///
/// Weeks are 1-based in plan text; buckets are 0-based. The covered range
/// is `[(X-1)/width, (Y-1)/width]` (floor division), intersected with
/// `[0, horizon)`. Indices beyond the horizon are silently dropped — the
/// chart simply does not show work past the planning window.
///
/// A reversed range (`Y < X`) yields an empty set: the inclusive bucket
/// range is empty when its bounds are reversed. Likewise, an annotation
/// with no week range maps to no buckets. Neither case is an error.
///
/// # Examples
///
/// ```
/// use sprintchart_core::ChartConfig;
/// use sprintchart_extract::map_to_buckets;
///
/// let config = ChartConfig::default();
/// assert_eq!(map_to_buckets("Weeks 1-3 (~10 days)", &config), vec![0, 1]);
/// assert_eq!(map_to_buckets("Weeks 5-4", &config), Vec::<usize>::new());
/// assert_eq!(map_to_buckets("", &config), Vec::<usize>::new());
/// ```
pub fn map_to_buckets(raw_timeline: &str, config: &ChartConfig) -> Vec<usize> {
    let Some((start_week, end_week)) = week_range(raw_timeline) else {
        return Vec::new();
    };

    let width = i64::from(config.bucket_width_weeks.max(1));
    let start_bucket = (i64::from(start_week) - 1).div_euclid(width);
    let end_bucket = (i64::from(end_week) - 1).div_euclid(width);

    (start_bucket..=end_bucket)
        .filter(|bucket| (0..i64::from(config.horizon_buckets)).contains(bucket))
        .map(|bucket| bucket as usize)
        .collect()
}
