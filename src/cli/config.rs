//! Configuration file loading
//!
//! The file is a single JSON object. Every key is optional; missing keys take
//! their defaults. The loaded config is validated before use.

use std::fs;
use std::path::Path;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::catalog::catalog;
use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Server settings (`host`, `port`, `cors_origins`, defaults for the form)
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// Log output format (optional, default "pretty")
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        let server = &self.server;

        if server.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        if server.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        for origin in &server.cors_origins {
            HeaderValue::from_str(origin).map_err(|_| {
                CliError::config_error(format!("Invalid CORS origin: '{}'", origin))
            })?;
        }

        let branch = catalog().branch(&server.default_branch).ok_or_else(|| {
            CliError::config_error(format!(
                "Unknown default_branch: '{}'",
                server.default_branch
            ))
        })?;

        if branch.subject(&server.default_subject).is_none() {
            return Err(CliError::config_error(format!(
                "Unknown default_subject: '{}' is not part of '{}'",
                server.default_subject, server.default_branch
            )));
        }

        Ok(())
    }

    /// Apply a command-line port override
    pub fn with_port_override(mut self, port: Option<u16>) -> CliResult<Self> {
        if let Some(port) = port {
            self.server.port = port;
            self.validate()?;
        }
        Ok(self)
    }
}
