// SPDX-License-Identifier: MPL-2.0
//! Image decoding and scale-to-fit rendering.
//!
//! Decoding turns a file into an [`image_rs::DynamicImage`]; rendering turns
//! that source into a [`Frame`] sized for the current viewport and zoom.

pub mod image;
pub mod render;

use crate::config::SUPPORTED_EXTENSIONS;
use std::path::Path;

// Re-export commonly used types
pub use image::load_image;
pub use render::{
    fit_scale, fit_size, render_async, render_frame, Frame, RenderOutcome, RenderRequest, Rendered,
};

/// Returns whether the file name ends with one of the supported image
/// extensions.
///
/// The comparison is ASCII case-insensitive, so `photo.JPG` matches. Only the
/// name suffix counts, so a dotfile such as `.png` matches too.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            let name = name.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|ext| name.ends_with(&format!(".{ext}")))
        })
}
