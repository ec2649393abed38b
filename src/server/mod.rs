//! HTTP server layer for image-squeezer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │              POST /upload          GET /                        │
//! │                                                                 │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐  │
//! │  │  handlers   │  │     ui      │  │        routes           │  │
//! │  │ (requests)  │  │ (HTML page) │  │  (router config)        │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;
pub mod ui;

pub use handlers::{
    ui_handler, upload_handler, AppState, ErrorResponse, TranscodeResponse, UploadForm,
    COMPRESSION_FIELD, FAILURE_MESSAGE, IMAGE_FIELD,
};
pub use routes::{create_router, RouterConfig, DEFAULT_MAX_UPLOAD_SIZE, UI_PATH, UPLOAD_PATH};
pub use ui::generate_ui_html;
