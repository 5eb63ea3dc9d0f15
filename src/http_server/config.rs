//! HTTP Server Configuration
//!
//! Bind address, CORS origins and the branch/subject preselected on the form.

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins (default: empty, permissive)
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Branch preselected on the empty form
    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// Subject preselected on the empty form
    #[serde(default = "default_subject")]
    pub default_subject: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_branch() -> String {
    "Computer Science".to_string()
}

fn default_subject() -> String {
    "Data Structures".to_string()
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            default_branch: default_branch(),
            default_subject: default_subject(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string; IPv6 literals are bracketed
    pub fn socket_addr(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
