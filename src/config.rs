//! Configuration management for image-squeezer.
//!
//! This module provides a configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `SQUEEZER_` prefix
//! - Sensible defaults for all optional settings
//!
//! The parsed [`Config`] is the only process-wide state; it is built once at
//! startup and turned into a [`RouterConfig`](crate::server::RouterConfig).
//!
//! # Environment Variables
//!
//! - `SQUEEZER_HOST` - Server bind address (default: 0.0.0.0)
//! - `SQUEEZER_PORT` - Server port (default: 5000)
//! - `SQUEEZER_MAX_UPLOAD_SIZE` - Maximum upload body in bytes (default: 10 MiB)
//! - `SQUEEZER_CORS_ORIGINS` - Comma-separated allowed origins (default: any)
//! - `SQUEEZER_NO_UI` - Do not serve the client UI (default: false)

use clap::Parser;

use crate::server::{RouterConfig, DEFAULT_MAX_UPLOAD_SIZE};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 5000;

// =============================================================================
// CLI Arguments
// =============================================================================

/// image-squeezer - Re-encode uploaded images as JPEG.
///
/// Serves a small web page and a `POST /upload` endpoint that compresses an
/// image at a low, medium or high quality tier and returns it inline.
#[derive(Parser, Debug, Clone)]
#[command(name = "image-squeezer")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "SQUEEZER_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "SQUEEZER_PORT")]
    pub port: u16,

    /// Maximum accepted upload size in bytes (whole multipart body).
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_SIZE, env = "SQUEEZER_MAX_UPLOAD_SIZE")]
    pub max_upload_size: usize,

    /// Do not serve the client UI at `/`.
    #[arg(long, default_value_t = false, env = "SQUEEZER_NO_UI")]
    pub no_ui: bool,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "SQUEEZER_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty. Set --host or SQUEEZER_HOST".to_string());
        }

        if self.max_upload_size == 0 {
            return Err("max_upload_size must be greater than 0".to_string());
        }

        if let Some(ref origins) = self.cors_origins {
            if origins.iter().any(|o| o.trim().is_empty()) {
                return Err("cors_origins must not contain empty entries".to_string());
            }
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the router configuration from these settings.
    pub fn router_config(&self) -> RouterConfig {
        let mut router_config = RouterConfig::new()
            .with_max_upload_size(self.max_upload_size)
            .with_ui(!self.no_ui)
            .with_tracing(!self.no_tracing);

        if let Some(ref origins) = self.cors_origins {
            router_config = router_config.with_cors_origins(origins.clone());
        }

        router_config
    }
}

// =============================================================================
// Tests
// =============================================================================
