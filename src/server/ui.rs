//! Client UI - generates the single-page upload client.
//!
//! The page is plain HTML and JavaScript with no build step. It handles
//! drag-and-drop or file-picker selection, local preview, tier selection,
//! one `multipart/form-data` POST at a time, and rendering of the returned
//! statistics, image and download link.

use crate::transcode::QualityTier;

const UI_TEMPLATE: &str = include_str!("ui.html");

/// Filename offered by the download link.
pub const DOWNLOAD_FILE_NAME: &str = "compressed-image.jpg";

/// Render the `<option>` list for the tier selector.
fn quality_options(selected: QualityTier) -> String {
    QualityTier::ALL
        .iter()
        .map(|tier| {
            let selected_attr = if *tier == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                tier.label(),
                selected_attr,
                tier.display_name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ")
}

/// Generate the upload client page.
///
/// # Arguments
///
/// * `upload_path` - Path the form is POSTed to (e.g., "/upload"), inserted verbatim
/// * `default_tier` - Tier preselected in the compression selector
pub fn generate_ui_html(upload_path: &str, default_tier: QualityTier) -> String {
    UI_TEMPLATE
        .replace("{{UPLOAD_PATH}}", upload_path)
        .replace("{{QUALITY_OPTIONS}}", &quality_options(default_tier))
        .replace("{{DOWNLOAD_FILE_NAME}}", DOWNLOAD_FILE_NAME)
        .replace("{{VERSION}}", env!("CARGO_PKG_VERSION"))
}
