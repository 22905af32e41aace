use anyhow::Result;
use stacksift_collector::input::write_samples;
use stacksift_collector::{run_replay, CollectorConfig, InputFormat, OutputFormat, StackCollector};
use stacksift_filter::compile;
use stacksift_shared::types::events::StackSample;
use stacksift_shared::types::profile::Frame;
use tempfile::tempdir;

fn recorded_samples() -> Vec<StackSample> {
    let request = vec![
        Frame::new("/app/database/models.py", "query"),
        Frame::new("/app/views.py", "handle_request"),
        Frame::new("/app/main.py", "main"),
    ];
    let user_get = vec![
        Frame::new("/app/api.py", "UserView.get"),
        Frame::new("/app/main.py", "main"),
    ];
    let user_post = vec![
        Frame::new("/app/api.py", "UserView.post"),
        Frame::new("/app/main.py", "main"),
    ];
    let unresolved = vec![Frame::default(), Frame::default()];

    vec![
        StackSample::new(100, 1, 1, request.clone()),
        StackSample::new(200, 1, 1, request),
        StackSample::new(300, 1, 2, user_get.clone()),
        StackSample::new(400, 1, 2, user_get),
        StackSample::new(500, 1, 2, user_post),
        StackSample::new(600, 1, 3, unresolved),
    ]
}

#[test]
fn test_replay_folded_with_qualified_filter() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("samples.json");
    write_samples(&input, &recorded_samples(), InputFormat::Json)?;

    let config = CollectorConfig {
        filter: Some("api.py::UserView::get".to_string()),
        ..Default::default()
    };

    let mut out = Vec::new();
    let summary = run_replay(&config, &input, &mut out)?;

    assert_eq!(summary.kept, 2);
    assert_eq!(summary.filtered, 4);
    assert_eq!(summary.unique_stacks, 1);
    assert_eq!(
        String::from_utf8(out)?,
        "main (/app/main.py);UserView.get (/app/api.py) 2\n"
    );

    Ok(())
}

#[test]
fn test_replay_without_filter_keeps_everything() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("samples.bin");
    write_samples(&input, &recorded_samples(), InputFormat::Bincode)?;

    let config = CollectorConfig {
        input_format: InputFormat::Bincode,
        ..Default::default()
    };

    let mut out = Vec::new();
    let summary = run_replay(&config, &input, &mut out)?;

    assert_eq!(summary.kept, 6);
    assert_eq!(summary.filtered, 0);
    assert_eq!(summary.unique_stacks, 4);
    assert!(String::from_utf8(out)?.contains("<unknown>;<unknown> 1"));

    Ok(())
}

#[test]
fn test_replay_json_report_with_path_filter() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("samples.json");
    write_samples(&input, &recorded_samples(), InputFormat::Json)?;

    let config = CollectorConfig {
        filter: Some("Database/Models.py".to_string()),
        output_format: OutputFormat::Json,
        ..Default::default()
    };

    let mut out = Vec::new();
    let summary = run_replay(&config, &input, &mut out)?;
    assert_eq!(summary.kept, 2);

    let report: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(report["total_samples"], 2);
    assert_eq!(report["filtered_samples"], 4);
    assert_eq!(report["start_time"], 100);
    assert_eq!(report["end_time"], 200);
    assert_eq!(report["samples"][0]["count"], 2);

    Ok(())
}

#[test]
fn test_replay_rejects_invalid_config() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("samples.json");
    write_samples(&input, &recorded_samples(), InputFormat::Json)?;

    let config = CollectorConfig {
        source_extensions: vec!["py".to_string()],
        ..Default::default()
    };

    assert!(run_replay(&config, &input, Vec::new()).is_err());
    Ok(())
}

#[test]
fn test_replay_missing_input() {
    let dir = tempdir().unwrap();
    let config = CollectorConfig::default();
    let err = run_replay(&config, &dir.path().join("missing.json"), Vec::new()).unwrap_err();
    assert!(err.to_string().contains("Failed to load samples"));
}

#[test]
fn test_collector_substring_filter_matches_any_frame() {
    let mut collector = StackCollector::new(compile(Some("main")));
    for sample in recorded_samples() {
        collector.add_sample(sample);
    }

    // Every resolved stack bottoms out in main()
    assert_eq!(collector.sample_count(), 5);
    assert_eq!(collector.filtered_count(), 1);
}
