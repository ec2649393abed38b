//! image-squeezer - re-encode uploaded images as JPEG.
//!
//! This binary starts the HTTP server and configures all components.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use image_squeezer::{
    config::Config,
    server::create_router,
    transcode::{QualityTier, TranscodeService},
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    run_serve(config).await
}

async fn run_serve(config: Config) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    print_banner();

    info!("Configuration:");
    info!(
        "  Max upload size: {:.1} MiB",
        config.max_upload_size as f64 / (1024.0 * 1024.0)
    );
    match config.cors_origins {
        Some(ref origins) if origins.is_empty() => {
            warn!("  CORS: no origins allowed - cross-origin clients will be rejected")
        }
        Some(ref origins) => info!("  CORS origins: {}", origins.join(", ")),
        None => info!("  CORS: any origin"),
    }
    info!(
        "  Quality tiers: {}",
        QualityTier::ALL
            .iter()
            .map(|t| format!("{}={}", t, t.quality()))
            .collect::<Vec<_>>()
            .join(", ")
    );
    if config.no_ui {
        info!("  Client UI: disabled");
    }

    let router = create_router(TranscodeService::new(), config.router_config());

    let addr = config.bind_address();

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("");
    info!("────────────────────────────────────────────────────────────────");
    info!("  Server running at http://{}", addr);
    info!("");
    if !config.no_ui {
        info!("  Open the compressor in your browser:");
        info!("    open http://{}/", addr);
        info!("");
    }
    info!("  Compress an image from the command line:");
    info!(
        "    curl -F image=@photo.png -F compression=high http://{}/upload",
        addr
    );
    info!("────────────────────────────────────────────────────────────────");
    info!("");

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Print the startup banner.
fn print_banner() {
    let version = env!("CARGO_PKG_VERSION");
    info!("");
    info!("  ┌─┐┌─┐ ┬ ┬┌─┐┌─┐┌─┐┌─┐┬─┐");
    info!("  └─┐│─┼┐│ │├┤ ├┤ ┌─┘├┤ ├┬┘");
    info!("  └─┘└─┘└└─┘└─┘└─┘└─┘└─┘┴└─");
    info!("  image-squeezer v{}", version);
    info!("");
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "image_squeezer=debug,tower_http=debug"
    } else {
        "image_squeezer=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
