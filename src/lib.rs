//! # image-squeezer
//!
//! A small HTTP service that re-encodes uploaded images as JPEG at a coarse
//! quality tier and hands the result back inline.
//!
//! A browser client posts one image plus a tier label (`low`, `medium`,
//! `high`) to `POST /upload`. The service maps the tier to a JPEG quality,
//! re-encodes the image and answers with the byte counts before and after
//! compression and the compressed image as a `data:image/jpeg;base64,...`
//! URI. Nothing is stored; every request is independent.
//!
//! ## Features
//!
//! - **Any common input format**: JPEG, PNG, GIF, WebP, BMP and TIFF uploads
//!   are decoded and re-encoded as JPEG
//! - **Fixed quality table**: low → 50, medium → 70, high → 90, with unknown
//!   tiers falling back to medium
//! - **Built-in client**: a drag-and-drop upload page served at `/`
//!
//! ## Architecture
//!
//! - [`transcode`] - Quality tiers, the image codec and the transcode service
//! - [`server`] - Axum-based HTTP server, routes and the client UI
//! - [`config`] - CLI and configuration types
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```rust,no_run
//! use image_squeezer::{create_router, RouterConfig, TranscodeService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let router = create_router(TranscodeService::new(), RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod transcode;

// Re-export commonly used types
pub use config::Config;
pub use error::{DataUriError, TranscodeError};
pub use server::{
    create_router, generate_ui_html, ui_handler, upload_handler, AppState, ErrorResponse,
    RouterConfig, TranscodeResponse, UploadForm, UPLOAD_PATH,
};
pub use transcode::{
    resolve_quality, DataUri, ImageCodec, JpegCodec, QualityTier, TranscodeOutcome,
    TranscodeRequest, TranscodeService, DEFAULT_QUALITY,
};
