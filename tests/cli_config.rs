//! CLI Tests
//!
//! Config files on disk feeding the server, and the `verify` report.

use std::fs;

use doubtdesk::cli::{build_verify_report, CliErrorCode, Config, CANONICAL_DOUBTS};
use doubtdesk::http_server::HttpServer;
use doubtdesk::observability::LogFormat;
use doubtdesk::selector::Selection;
use tempfile::TempDir;

// =============================================================================
// Config Files
// =============================================================================

#[test]
fn test_config_file_drives_server_address() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("doubtdesk.json");
    fs::write(&path, r#"{"host": "0.0.0.0", "port": 8088, "log_format": "json"}"#).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.log_format, LogFormat::Json);

    let server = HttpServer::with_config(config.server);
    assert_eq!(server.socket_addr(), "0.0.0.0:8088");
}

#[tokio::test]
async fn test_localhost_config_binds() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("doubtdesk.json");
    fs::write(&path, r#"{"host": "localhost"}"#).unwrap();

    let config = Config::load(&path).unwrap();
    // Ephemeral port so the test never collides with a running server
    let mut server_config = config.server;
    server_config.port = 0;

    let listener = HttpServer::with_config(server_config).bind().await.unwrap();
    assert!(listener.local_addr().unwrap().ip().is_loopback());
}

#[test]
fn test_port_flag_overrides_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("doubtdesk.json");
    fs::write(&path, r#"{"port": 8088}"#).unwrap();

    let config = Config::load_or_default(Some(path.as_path()))
        .unwrap()
        .with_port_override(Some(9000))
        .unwrap();
    assert_eq!(config.server.port, 9000);
}

#[test]
fn test_subject_from_wrong_branch_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("doubtdesk.json");
    fs::write(
        &path,
        r#"{"default_branch": "Computer Science", "default_subject": "Organic Chemistry"}"#,
    )
    .unwrap();

    let err = Config::load(&path).unwrap_err();
    assert_eq!(err.code(), &CliErrorCode::ConfigError);
    assert!(err.code_str().starts_with("DOUBTDESK_CLI_"));
}

// =============================================================================
// Verify Report
// =============================================================================

#[test]
fn test_verify_covers_every_sample() {
    let report = build_verify_report();

    assert_eq!(report.subjects, 10);
    assert_eq!(report.total_samples, 60);
    assert_eq!(
        report.coverage.iter().map(|c| c.specific).sum::<usize>(),
        report.specific
    );
    assert!(report.coverage.iter().all(|c| c.specific + c.fallback == c.samples));
}

#[test]
fn test_verify_canonical_doubts_in_order() {
    let report = build_verify_report();

    let subjects: Vec<&str> = report.checks.iter().map(|p| p.subject).collect();
    let expected: Vec<&str> = CANONICAL_DOUBTS.iter().map(|&(_, subject, _)| subject).collect();
    assert_eq!(subjects, expected);

    assert_eq!(report.checks[1].selection, Selection::Rule { index: 1 });
    assert!(report.passed());
}
