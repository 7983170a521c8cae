//! Shared helpers for workspace integration tests

#![allow(dead_code)]

use aimbridge::RunRecord;

/// Start timestamp used by the sample runs (epoch milliseconds)
pub const START_MS: i64 = 1_700_000_000_000;
/// End timestamp used by the sample runs (epoch milliseconds)
pub const END_MS: i64 = 1_700_000_100_000;

/// A finished run with a couple of params, metrics, and tags
pub fn finished_run(run_id: &str) -> RunRecord {
    let mut run = RunRecord::new(run_id);
    run.start_time = Some(START_MS);
    run.end_time = Some(END_MS);
    run.status = Some("FINISHED".to_string());
    run.user_id = Some("alice".to_string());
    run.experiment_id = Some("7".to_string());
    run.artifact_uri = Some("s3://bucket/artifacts".to_string());
    run.params.insert("n_estimators".to_string(), "100".to_string());
    run.params.insert("max_depth".to_string(), "5".to_string());
    run.metrics.insert("accuracy".to_string(), 0.97);
    run.tags
        .insert("mlflow.runName".to_string(), "iris-forest".to_string());
    run
}

/// A still-active run (no end timestamp)
pub fn open_run(run_id: &str) -> RunRecord {
    let mut run = finished_run(run_id);
    run.end_time = None;
    run.status = Some("RUNNING".to_string());
    run
}

/// Add the data-sheet driving tag so the document satisfies the mock
/// receiver's required fields
pub fn with_data_sheet(mut run: RunRecord) -> RunRecord {
    run.tags.insert(
        "dataSheet_url".to_string(),
        "https://example.com/sheet.json".to_string(),
    );
    run
}
