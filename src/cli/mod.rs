//! CLI module for doubtdesk
//!
//! Provides command-line interface for:
//! - serve: Load config and run the web server
//! - explain: One-shot explanation to stdout
//! - verify: Sample-doubt coverage report

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, OutputFormat};
pub use commands::{
    build_verify_report, explain, run, run_command, serve, verify, CanonicalCheck, SubjectCoverage,
    VerifyReport, CANONICAL_DOUBTS,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_html, write_response};
