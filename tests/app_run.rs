//! Application-level tests: arguments and config file through to the report file

mod common;

use clap::Parser;
use common::{write_file, SAMPLE_ITEMS};
use scorepipe::app::cli::{load_config_file, Args, FileConfig};
use scorepipe::app::error::AppError;
use scorepipe::app::startup::run;
use scorepipe::core::error_handling::ContextualError;

fn parse(argv: &[&str]) -> Args {
    let mut full = vec!["scorepipe"];
    full.extend_from_slice(argv);
    Args::try_parse_from(full).unwrap()
}

#[tokio::test]
async fn test_run_writes_report_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "items.json", SAMPLE_ITEMS);
    let output = dir.path().join("report.txt");

    let args = parse(&[
        "-i",
        input.to_str().unwrap(),
        "-O",
        output.to_str().unwrap(),
        "-w",
        "2",
        "-b",
        "1",
        "--workload-delay-ms",
        "0",
        "--totals",
    ]);
    run(&args, &FileConfig::default()).await.unwrap();

    let report = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("C "));
    assert!(lines[2].starts_with("A "));
    assert_eq!(lines[3], "Sum of weight fields: 2");
}

#[tokio::test]
async fn test_config_file_supplies_input_and_mode() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "items.json", SAMPLE_ITEMS);
    let output = dir.path().join("report.txt");
    let config_path = write_file(
        dir.path(),
        "scorepipe.toml",
        &format!(
            "input = {:?}\noutput = {:?}\nmode = \"partitioned\"\nworkers = 3\nworkload-delay-ms = 0\n",
            input.to_str().unwrap(),
            output.to_str().unwrap()
        ),
    );

    let file_config = load_config_file(Some(&config_path)).await.unwrap();
    run(&parse(&[]), &file_config).await.unwrap();

    let report = std::fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("element name"));
    assert!(!report.contains("Sum of"));
}

#[tokio::test]
async fn test_malformed_input_is_user_actionable() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "items.json", r#"[{"elementName": "A"}]"#);

    let err = run(&parse(&["-i", input.to_str().unwrap()]), &FileConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Input(_)));
    assert!(err.is_user_actionable());
    assert_eq!(err.operation(), "Reading input");
}

#[tokio::test]
async fn test_unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "items.json", SAMPLE_ITEMS);
    let output = dir.path().join("missing-dir").join("report.txt");

    let err = run(
        &parse(&[
            "-i",
            input.to_str().unwrap(),
            "-O",
            output.to_str().unwrap(),
            "--workload-delay-ms",
            "0",
        ]),
        &FileConfig::default(),
    )
    .await
    .unwrap_err();

    match err {
        AppError::Output { message, .. } => assert!(message.contains("missing-dir")),
        other => panic!("Expected Output error, got {:?}", other),
    }
}
