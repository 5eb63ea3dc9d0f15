//! CLI command implementations

use std::path::Path;

use serde::Serialize;

use crate::catalog::{catalog, Template};
use crate::http_server::HttpServer;
use crate::observability::{self, log_event, Event};
use crate::selector::{self, Selection};

use super::args::{Command, OutputFormat};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_html, write_response};

/// Canonical doubts that must resolve to a specific rule
pub const CANONICAL_DOUBTS: &[(&str, &str, &str)] = &[
    ("Computer Science", "Data Structures", "stack and queue"),
    ("Computer Science", "Operating Systems", "thread"),
    ("Computer Science", "Algorithms", "backtracking"),
    ("Computer Science", "Database Management Systems", "join"),
    ("Computer Science", "Artificial Intelligence", "overfitting"),
];

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(config.as_deref(), port),
        Command::Explain {
            branch,
            subject,
            format,
            question,
        } => explain(&branch, &subject, &question.join(" "), format),
        Command::Verify => verify(),
    }
}

/// Start the web server
///
/// Startup sequence:
/// 1. Configuration load and validation
/// 2. Logging initialization
/// 3. Router construction and listener bind
///
/// Runs until Ctrl-C.
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?.with_port_override(port)?;

    observability::init_logging(config.log_format)?;
    log_event(Event::BootStart);

    let addr = config.server.socket_addr();
    let samples = catalog().sample_count();
    tracing::info!(
        event = %Event::ConfigLoaded,
        addr = %addr,
        log_format = %config.log_format,
        samples,
        "configuration loaded"
    );

    let server = HttpServer::with_config(config.server);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            log_event(Event::ServerFailed);
            CliError::boot_failed(format!("HTTP server failed: {}", e))
        })
    })?;

    Ok(())
}

/// JSON payload of a one-shot explanation
#[derive(Debug, Serialize)]
pub struct ExplainOutput {
    pub html: String,
    pub selection: Selection,
    pub template: Template,
}

/// Explain a single doubt and write it to stdout
pub fn explain(branch: &str, subject: &str, question: &str, format: OutputFormat) -> CliResult<()> {
    let explanation = selector::select(branch, subject, question);
    let html = selector::render(&explanation);

    match format {
        OutputFormat::Html => write_html(&html),
        OutputFormat::Json => write_response(&ExplainOutput {
            html,
            selection: explanation.selection,
            template: explanation.template,
        }),
    }
}

/// Coverage of one subject's sample doubts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectCoverage {
    pub branch: &'static str,
    pub subject: &'static str,
    pub samples: usize,
    /// Samples that hit a specific rule
    pub specific: usize,
    /// Samples that hit the subject fallback
    pub fallback: usize,
}

/// Outcome of one canonical doubt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalCheck {
    pub branch: &'static str,
    pub subject: &'static str,
    pub question: &'static str,
    pub selection: Selection,
    pub passed: bool,
}

/// Self-test report written by `verify`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub subjects: usize,
    pub total_samples: usize,
    pub specific: usize,
    pub fallback: usize,
    pub coverage: Vec<SubjectCoverage>,
    pub checks: Vec<CanonicalCheck>,
}

impl VerifyReport {
    /// True if every canonical doubt hit a specific rule
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|p| p.passed)
    }
}

/// Run every sample doubt and canonical doubt through the selector
pub fn build_verify_report() -> VerifyReport {
    let mut coverage = Vec::new();

    for branch in catalog().branches() {
        for subject in branch.subjects {
            let specific = subject
                .samples
                .iter()
                .filter(|doubt| {
                    selector::select(branch.name, subject.name, doubt)
                        .selection
                        .is_specific()
                })
                .count();

            coverage.push(SubjectCoverage {
                branch: branch.name,
                subject: subject.name,
                samples: subject.samples.len(),
                specific,
                fallback: subject.samples.len() - specific,
            });
        }
    }

    let checks = CANONICAL_DOUBTS
        .iter()
        .map(|&(branch, subject, question)| {
            let selection = selector::select(branch, subject, question).selection;
            CanonicalCheck {
                branch,
                subject,
                question,
                selection,
                passed: selection.is_specific(),
            }
        })
        .collect();

    VerifyReport {
        subjects: coverage.len(),
        total_samples: coverage.iter().map(|c| c.samples).sum(),
        specific: coverage.iter().map(|c| c.specific).sum(),
        fallback: coverage.iter().map(|c| c.fallback).sum(),
        coverage,
        checks,
    }
}

/// Write the verification report; fails if any canonical doubt fell back
pub fn verify() -> CliResult<()> {
    log_event(Event::VerifyBegin);

    let report = build_verify_report();
    write_response(&report)?;

    if !report.passed() {
        log_event(Event::VerifyFailed);
        let failed: Vec<String> = report
            .checks
            .iter()
            .filter(|p| !p.passed)
            .map(|p| format!("{}/{:?}", p.subject, p.question))
            .collect();
        return Err(CliError::verification_failed(format!(
            "canonical doubts fell back: {}",
            failed.join(", ")
        )));
    }

    log_event(Event::VerifyComplete);
    Ok(())
}
