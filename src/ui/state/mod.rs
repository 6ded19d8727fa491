// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the browser's state logic separated from the
//! widgets, following the principle of separation of concerns.

pub mod slideshow;
pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use slideshow::Slideshow;
pub use viewport::ViewportState;
pub use zoom::ZoomLevel;
