// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the window size and derives the canvas area the current image
//! is fitted into.

use crate::config::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::ui::design_tokens::sizing;
use iced::Size;

/// Manages the window size and the canvas bounds derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    /// Current window size in logical pixels
    pub window: Size,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            window: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        }
    }
}

impl ViewportState {
    /// Records a new window size.
    /// Returns true if the size actually changed.
    pub fn update(&mut self, window: Size) -> bool {
        if self.window == window {
            return false;
        }
        self.window = window;
        true
    }

    /// Returns the drawing area for the image.
    ///
    /// In windowed mode the header, toolbar and status bar are subtracted.
    /// In fullscreen the canvas covers the whole window. Each axis is at
    /// least 1 px.
    #[must_use]
    pub fn canvas_size(&self, fullscreen: bool) -> Size {
        let chrome = if fullscreen {
            0.0
        } else {
            sizing::HEADER_HEIGHT + sizing::TOOLBAR_HEIGHT + sizing::STATUS_BAR_HEIGHT
        };

        Size::new(
            self.window.width.max(1.0),
            (self.window.height - chrome).max(1.0),
        )
    }
}
