use std::fs;
use std::path::PathBuf;

use sprintchart_core::{ChartConfig, OutlineRecord};
use sprintchart_extract::{chart_rows, extract_outline, extract_outline_with_report};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

#[test]
fn test_minimal_plan_end_to_end() {
    let plan = "\
## Engineer 1: X
**Phase 1: Plan**
1.  **Do thing**
*   **Timeline/Effort:** Weeks 1-3 (~10 days)
";
    let records = extract_outline(plan);
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
        OutlineRecord::EngineerHeader {
            name: "Engineer 1: X".to_string(),
        }
    );
    assert_eq!(
        records[1],
        OutlineRecord::PhaseHeader {
            name: "Plan".to_string(),
            engineer: Some("Engineer 1: X".to_string()),
        }
    );

    let activity = records[2].as_activity().expect("activity record");
    assert_eq!(activity.ordinal, "1.");
    assert_eq!(activity.title, "Do thing");
    assert_eq!(activity.raw_timeline, "Weeks 1-3 (~10 days)");
    assert_eq!(activity.week_label, "(W1-W3)");

    let rows = chart_rows(&records, &ChartConfig::default());
    assert_eq!(rows[2].buckets(), &[0, 1]);
}

#[test]
fn test_pilot_plan_record_sequence() {
    let plan = fixture("pilot_plan.md");
    let records = extract_outline(&plan);

    let engineers = records
        .iter()
        .filter(|r| matches!(r, OutlineRecord::EngineerHeader { .. }))
        .count();
    let phases = records
        .iter()
        .filter(|r| matches!(r, OutlineRecord::PhaseHeader { .. }))
        .count();
    let activities: Vec<_> = records.iter().filter_map(|r| r.as_activity()).collect();

    assert_eq!(engineers, 2);
    assert_eq!(phases, 3);
    assert_eq!(activities.len(), 6);
    assert_eq!(records.len(), 11);
}

#[test]
fn test_pilot_plan_parent_linkage() {
    let plan = fixture("pilot_plan.md");
    let records = extract_outline(&plan);
    let activities: Vec<_> = records.iter().filter_map(|r| r.as_activity()).collect();

    assert_eq!(
        activities[0].engineer.as_deref(),
        Some("Engineer 1: Central UAT Test Case Identification & Migration")
    );
    assert_eq!(
        activities[0].phase.as_deref(),
        Some("Discovery, Analysis & Planning")
    );

    // Third activity falls under the second phase of engineer one.
    assert_eq!(activities[2].phase.as_deref(), Some("Migration Execution"));

    // Activities under engineer two pick up the new engineer and phase.
    assert_eq!(
        activities[4].engineer.as_deref(),
        Some("Engineer 2: Reporting & Dashboard Automation")
    );
    assert_eq!(activities[4].phase.as_deref(), Some("Foundations"));
}

#[test]
fn test_pilot_plan_timelines_and_labels() {
    let plan = fixture("pilot_plan.md");
    let records = extract_outline(&plan);
    let activities: Vec<_> = records.iter().filter_map(|r| r.as_activity()).collect();

    assert_eq!(activities[0].raw_timeline, "Weeks 1-3 (~10-12 person-days)");
    assert_eq!(activities[0].week_label, "(W1-W3)");

    assert_eq!(activities[2].week_label, "(W7-W14)");

    // "Ongoing Stakeholder Reviews" has no annotation; the next engineer
    // header ends its lookahead window.
    assert!(activities[3].raw_timeline.is_empty());
    assert!(activities[3].week_label.is_empty());
}

#[test]
fn test_pilot_plan_chart_rows_and_bucket_sets() {
    let plan = fixture("pilot_plan.md");
    let config = ChartConfig::default();
    let rows = chart_rows(&extract_outline(&plan), &config);

    assert_eq!(rows.len(), 11);

    let bucket_sets: Vec<&[usize]> = rows
        .iter()
        .filter(|row| matches!(row, sprintchart_core::ChartRow::Activity { .. }))
        .map(|row| row.buckets())
        .collect();

    assert_eq!(bucket_sets[0], &[0, 1]);
    assert_eq!(bucket_sets[1], &[1, 2]);
    assert_eq!(bucket_sets[2], &[3, 4, 5, 6]);
    assert_eq!(bucket_sets[3], &[] as &[usize]);
    assert_eq!(bucket_sets[4], &[2, 3]);
    // "Weeks 23-30" runs past the 24-week horizon and is clipped.
    assert_eq!(bucket_sets[5], &[11]);
}

#[test]
fn test_pilot_plan_extraction_report() {
    let plan = fixture("pilot_plan.md");
    let run = extract_outline_with_report(&plan);

    assert_eq!(run.report.engineer_headers, 2);
    assert_eq!(run.report.phase_headers, 3);
    assert_eq!(run.report.activities, 6);
    assert_eq!(run.report.activities_with_timeline, 5);
    assert!(run.report.warnings.is_empty());
    assert!(run.report.coverage() > 0.5);
}

#[test]
fn test_pilot_plan_extraction_is_idempotent() {
    let plan = fixture("pilot_plan.md");
    assert_eq!(extract_outline(&plan), extract_outline(&plan));
}
