//! Router configuration for image-squeezer.
//!
//! This module defines the HTTP routes and applies middleware for CORS,
//! upload size limits and request tracing.
//!
//! # Route Structure
//!
//! ```text
//! /          - Client UI page (optional)
//! /upload    - Image upload and re-encode
//! ```
//!
//! # Example
//!
//! ```ignore
//! use image_squeezer::server::routes::{create_router, RouterConfig};
//! use image_squeezer::transcode::TranscodeService;
//!
//! let config = RouterConfig::new()
//!     .with_cors_origins(vec!["https://example.com".to_string()]);
//!
//! let router = create_router(TranscodeService::new(), config);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{ui_handler, upload_handler, AppState};
use crate::transcode::{ImageCodec, TranscodeService};

/// Path of the upload endpoint.
pub const UPLOAD_PATH: &str = "/upload";

/// Path of the client UI page.
pub const UI_PATH: &str = "/";

/// Default maximum request body size for uploads (10 MiB).
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Maximum accepted request body size in bytes
    pub max_upload_size: usize,

    /// Whether to serve the client UI at `/`
    pub ui_enabled: bool,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a new router configuration.
    ///
    /// By default:
    /// - CORS allows any origin
    /// - Uploads up to 10 MiB are accepted
    /// - The client UI is served
    /// - Tracing is enabled
    pub fn new() -> Self {
        Self {
            cors_origins: None,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
            ui_enabled: true,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    /// Pass None (or don't call this method) to allow any origin.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Allow any CORS origin.
    pub fn with_cors_any_origin(mut self) -> Self {
        self.cors_origins = None;
        self
    }

    /// Set the maximum request body size in bytes.
    pub fn with_max_upload_size(mut self, bytes: usize) -> Self {
        self.max_upload_size = bytes;
        self
    }

    /// Enable or disable the client UI route.
    pub fn with_ui(mut self, enabled: bool) -> Self {
        self.ui_enabled = enabled;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// This function builds the complete Axum router with:
/// - The upload route, with its own body limit
/// - The client UI route (optional)
/// - CORS configuration
/// - Request tracing (optional)
pub fn create_router<C>(transcode_service: TranscodeService<C>, config: RouterConfig) -> Router
where
    C: ImageCodec,
{
    let app_state = AppState::new(transcode_service);

    let cors = build_cors_layer(&config);

    let mut router = Router::new().route(
        UPLOAD_PATH,
        post(upload_handler::<C>).layer(DefaultBodyLimit::max(config.max_upload_size)),
    );

    if config.ui_enabled {
        router = router.route(UI_PATH, get(ui_handler));
    }

    let router = router.with_state(app_state).layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => {
            // No origins allowed - this effectively disables CORS
            cors
        }
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
