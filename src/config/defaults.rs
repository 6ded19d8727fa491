// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom factor bounds and step multiplier
//! - **Slideshow**: Auto-advance interval and its bounds
//! - **Window**: Initial window size
//! - **Formats**: Supported image extensions

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor applied when an image is first shown (1.0 = fit to viewport).
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM: f32 = 0.2;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM: f32 = 5.0;

/// Multiplier applied by one zoom-in step (and divisor for zoom-out).
pub const ZOOM_STEP_FACTOR: f32 = 1.25;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Delay between two automatic advances.
pub const DEFAULT_SLIDESHOW_INTERVAL_MS: u64 = 2000;

/// Shortest interval accepted from the settings file.
pub const MIN_SLIDESHOW_INTERVAL_MS: u64 = 500;

/// Longest interval accepted from the settings file.
pub const MAX_SLIDESHOW_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: f32 = 1000.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 700.0;

// ==========================================================================
// Supported Formats
// ==========================================================================

/// Lowercase image extensions recognized by the folder loader.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "gif", "webp"];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM > 0.0);
    assert!(MIN_ZOOM < DEFAULT_ZOOM);
    assert!(MAX_ZOOM > DEFAULT_ZOOM);
    assert!(ZOOM_STEP_FACTOR > 1.0);

    // Slideshow validation
    assert!(MIN_SLIDESHOW_INTERVAL_MS > 0);
    assert!(MAX_SLIDESHOW_INTERVAL_MS >= MIN_SLIDESHOW_INTERVAL_MS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_MS >= MIN_SLIDESHOW_INTERVAL_MS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_MS <= MAX_SLIDESHOW_INTERVAL_MS);

    // Window validation
    assert!(DEFAULT_WINDOW_WIDTH > 0.0);
    assert!(DEFAULT_WINDOW_HEIGHT > 0.0);
};
