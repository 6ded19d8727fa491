// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding (JPEG, PNG, BMP, GIF, WebP).

use crate::error::{Error, Result};
use image_rs::DynamicImage;
use std::fs;
use std::path::Path;

/// Load an image from the given path and decode it.
///
/// The format is detected from the file contents, not the extension.
/// Animated formats yield their first frame.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The bytes are not a valid image in a supported format ([`Error::Decode`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let bytes = fs::read(path.as_ref())?;
    image_rs::load_from_memory(&bytes).map_err(|err| Error::Decode(err.to_string()))
}
