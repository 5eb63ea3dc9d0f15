//! CLI argument definitions using clap
//!
//! Commands:
//! - doubtdesk serve [--config <path>] [--port <port>]
//! - doubtdesk explain --branch <branch> --subject <subject> <question...>
//! - doubtdesk verify

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// doubtdesk - keyword-matched explanations for student doubts
#[derive(Parser, Debug)]
#[command(name = "doubtdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the web server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port override
        #[arg(long)]
        port: Option<u16>,
    },

    /// Explain a single doubt and exit
    Explain {
        /// Branch name
        #[arg(long, default_value = "Computer Science")]
        branch: String,

        /// Subject name
        #[arg(long)]
        subject: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// The doubt text
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Run the sample doubts through the selector and report coverage
    Verify,
}

/// Output format for `explain`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered HTML fragment
    Html,
    /// JSON envelope with selection and template
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
