//! Test utilities for integration tests.
//!
//! This module provides a recording codec, test server and multipart form
//! construction, and helpers for synthesizing test images.

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

use image_squeezer::{create_router, ImageCodec, RouterConfig, TranscodeError, TranscodeService};

// =============================================================================
// Recording Codec
// =============================================================================

/// A codec that records every quality it is asked for.
///
/// Output is a fixed small JPEG-looking buffer so responses stay valid.
#[derive(Clone, Default)]
pub struct RecordingCodec {
    qualities: Arc<Mutex<Vec<u8>>>,
}

impl RecordingCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the recorded qualities, shared with clones of this codec.
    pub fn qualities(&self) -> Vec<u8> {
        self.qualities.lock().unwrap().clone()
    }
}

impl ImageCodec for RecordingCodec {
    fn media_type(&self) -> &'static str {
        "image/jpeg"
    }

    fn transcode(&self, _source: &[u8], quality: u8) -> Result<Bytes, TranscodeError> {
        self.qualities.lock().unwrap().push(quality);
        Ok(Bytes::from_static(&[0xFF, 0xD8, 0xFF, 0xD9]))
    }
}

// =============================================================================
// Test Servers
// =============================================================================

/// Test server over the real JPEG codec with the default router config.
pub fn jpeg_server() -> TestServer {
    server_with(TranscodeService::new(), RouterConfig::new().with_tracing(false))
}

/// Test server over a [`RecordingCodec`], returning the codec handle.
pub fn recording_server() -> (TestServer, RecordingCodec) {
    let codec = RecordingCodec::new();
    let server = server_with(
        TranscodeService::with_codec(codec.clone()),
        RouterConfig::new().with_tracing(false),
    );
    (server, codec)
}

/// Test server over an arbitrary service and router config.
pub fn server_with<C: ImageCodec>(service: TranscodeService<C>, config: RouterConfig) -> TestServer {
    TestServer::new(create_router(service, config)).unwrap()
}

// =============================================================================
// Multipart Forms
// =============================================================================

/// An `image` file part named like a PNG upload.
pub fn image_part(data: &[u8]) -> Part {
    Part::bytes(data.to_vec())
        .file_name("upload.png")
        .mime_type("image/png")
}

/// A form carrying just the image.
pub fn image_form(data: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part("image", image_part(data))
}

/// A form carrying the image and a compression tier.
pub fn upload_form(data: &[u8], compression: &str) -> MultipartForm {
    image_form(data).add_text("compression", compression)
}

// =============================================================================
// Test Image Creation
// =============================================================================

/// Create a photo-like RGB image: smooth gradients plus sensor-style noise.
pub fn create_photo_like_image(width: u32, height: u32) -> RgbImage {
    let mut state: u32 = 0x9e37_79b9;
    RgbImage::from_fn(width, height, |x, y| {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let noise = (state >> 24) % 48;
        let r = ((x * 255 / width.max(1)) + noise).min(255) as u8;
        let g = ((y * 255 / height.max(1)) + noise).min(255) as u8;
        let b = (((x + y) * 127 / (width + height).max(1)) + noise).min(255) as u8;
        Rgb([r, g, b])
    })
}

/// Encode an image as PNG.
pub fn encode_png(img: &RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Create a photo-like PNG.
pub fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    encode_png(&create_photo_like_image(width, height))
}

/// Create a PNG of uniform random pixels.
///
/// Noise defeats PNG's filters, so the file is slightly larger than the raw
/// `width * height * 3` pixel data.
pub fn create_noise_png(width: u32, height: u32) -> Vec<u8> {
    let mut state: u32 = 0x0bad_5eed;
    let img = RgbImage::from_fn(width, height, |_, _| {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let [_, a, b, c] = state.to_le_bytes();
        Rgb([a, b, c])
    });
    encode_png(&img)
}

/// Create a test JPEG at the given quality.
pub fn create_test_jpeg(width: u32, height: u32, quality: u8) -> Vec<u8> {
    let img = create_photo_like_image(width, height);
    let mut buf = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buf, quality);
    encoder.encode_image(&img).unwrap();
    buf
}

// =============================================================================
// Validation Helpers
// =============================================================================

/// Check if data is a valid JPEG.
pub fn is_valid_jpeg(data: &[u8]) -> bool {
    if data.len() < 4 {
        return false;
    }

    // Check SOI marker
    if data[0] != 0xFF || data[1] != 0xD8 {
        return false;
    }

    // Check EOI marker at end
    if data[data.len() - 2] != 0xFF || data[data.len() - 1] != 0xD9 {
        return false;
    }

    // Try to decode it
    image::load_from_memory_with_format(data, ImageFormat::Jpeg).is_ok()
}
