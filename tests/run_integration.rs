//! Tests for the full run: ingestion, notification and line counting.

mod helpers;

use std::collections::HashMap;
use std::path::PathBuf;

use helpers::write_lines;
use reqwest::StatusCode;
use tempfile::TempDir;
use user_ingest::{run, Config, LogFormat, LogLevel, TaskError};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper function to create a basic Config for testing
fn create_test_config(input_file: PathBuf, notify_url: String, count_files: Vec<PathBuf>) -> Config {
    Config {
        input_file,
        db_path: PathBuf::from(":memory:"),
        notify_url,
        notify: true,
        timeout_seconds: 2,
        user_agent: "user_ingest_test/1.0".to_string(),
        workers: 4,
        count_files,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
    }
}

#[tokio::test]
async fn test_run_posts_inserted_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ingest"))
        .and(body_json(serde_json::json!({ "inserted": 2 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let input = write_lines(&[
        "name=Alice,email=alice@example.com,role=admin",
        "bad line",
        "name=Bob,email=bob@example.com",
    ]);
    let config = create_test_config(
        input.path().to_path_buf(),
        format!("{}/ingest", server.uri()),
        Vec::new(),
    );

    let report = run(config).await.unwrap();
    assert_eq!(report.ingest.inserted, 2);
    assert_eq!(report.ingest.admins, 1);
    assert_eq!(report.ingest.skipped(), 1);
    assert_eq!(report.notify_status, Some(StatusCode::OK));
    assert!(report.line_counts.is_empty());
}

#[tokio::test]
async fn test_run_continues_when_input_and_endpoint_fail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({ "inserted": 0 })))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let counted = dir.path().join("input1.txt");
    std::fs::write(&counted, "a\nb\nc\n").unwrap();
    let missing_count = dir.path().join("input2.txt");

    let config = create_test_config(
        dir.path().join("users.txt"),
        server.uri(),
        vec![counted.clone(), missing_count.clone()],
    );

    let report = run(config).await.unwrap();
    assert_eq!(report.ingest.inserted, 0);
    assert_eq!(report.notify_status, None);
    assert_eq!(report.line_counts.len(), 2);

    for count in &report.line_counts {
        if count.path == counted {
            assert_eq!(*count.result.as_ref().unwrap(), 3);
        } else {
            assert_eq!(count.path, missing_count);
            assert!(matches!(count.result, Err(TaskError::NotFound { .. })));
        }
    }
}

#[tokio::test]
async fn test_run_counts_files_regardless_of_completion_order() {
    let dir = TempDir::new().unwrap();
    let files: Vec<(PathBuf, usize)> = [("three.txt", 3), ("zero.txt", 0), ("five.txt", 5)]
        .iter()
        .map(|(name, lines)| {
            let path = dir.path().join(name);
            std::fs::write(&path, "x\n".repeat(*lines)).unwrap();
            (path, *lines)
        })
        .collect();

    let mut config = create_test_config(
        dir.path().join("users.txt"),
        "https://example.invalid/ingest".to_string(),
        files.iter().map(|(p, _)| p.clone()).collect(),
    );
    config.notify = false;

    let report = run(config).await.unwrap();
    let counts: HashMap<PathBuf, usize> = report
        .line_counts
        .into_iter()
        .map(|c| (c.path, c.result.unwrap()))
        .collect();
    for (path, expected) in files {
        assert_eq!(counts[&path], expected);
    }
}

#[tokio::test]
async fn test_run_persists_to_database_file() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("users.db");
    let input = write_lines(&["name=Alice,email=alice@example.com"]);

    let mut config = create_test_config(
        input.path().to_path_buf(),
        String::new(),
        Vec::new(),
    );
    config.db_path = db_path.clone();
    config.notify = false;

    run(config).await.unwrap();

    let pool = user_ingest::init_db_pool_with_path(&db_path).await.unwrap();
    let users = user_ingest::list_users(&pool).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "alice@example.com");
}

#[tokio::test]
async fn test_run_rejects_invalid_config() {
    let config = Config {
        workers: 0,
        notify: false,
        count_files: Vec::new(),
        ..Default::default()
    };

    let err = run(config).await.unwrap_err();
    assert!(format!("{:#}", err).contains("workers"));
}

#[tokio::test]
async fn test_run_counts_lines_when_client_cannot_be_built() {
    let dir = TempDir::new().unwrap();
    let counted = dir.path().join("input1.txt");
    std::fs::write(&counted, "a\nb\n").unwrap();
    let input = write_lines(&["name=Alice,email=alice@example.com"]);

    let mut config = create_test_config(
        input.path().to_path_buf(),
        "https://example.invalid/ingest".to_string(),
        vec![counted.clone()],
    );
    // Not a valid header value, so the client builder rejects it
    config.user_agent = "bad\nagent".to_string();

    let report = run(config).await.unwrap();
    assert_eq!(report.ingest.inserted, 1);
    assert_eq!(report.notify_status, None);
    assert_eq!(report.line_counts.len(), 1);
    assert_eq!(report.line_counts[0].path, counted);
    assert_eq!(*report.line_counts[0].result.as_ref().unwrap(), 2);
}
