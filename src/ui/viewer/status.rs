// SPDX-License-Identifier: MPL-2.0
//! Status line contents.
//!
//! The status is kept as data and only turned into text when rendered,
//! through the active locale.

use crate::i18n::fluent::I18n;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ready,
    Loaded {
        count: usize,
        folder: String,
    },
    NoImagesFound,
    Showing {
        /// Zero-based index; shown one-based.
        index: usize,
        count: usize,
        width: u32,
        height: u32,
        /// Zoom formatted with one decimal.
        zoom: String,
    },
    SlideshowStarted {
        seconds: String,
    },
    SlideshowStopped,
    Fullscreen,
    Windowed,
    Error {
        message: String,
    },
}

impl Status {
    /// Renders the status in the current locale.
    #[must_use]
    pub fn localize(&self, i18n: &I18n) -> String {
        match self {
            Status::Ready => i18n.tr("status-ready"),
            Status::Loaded { count, folder } => i18n.tr_with_args(
                "status-loaded",
                &[("count", count.to_string().as_str()), ("folder", folder.as_str())],
            ),
            Status::NoImagesFound => i18n.tr("status-no-images"),
            Status::Showing {
                index,
                count,
                width,
                height,
                zoom,
            } => i18n.tr_with_args(
                "status-showing",
                &[
                    ("index", (index + 1).to_string().as_str()),
                    ("count", count.to_string().as_str()),
                    ("width", width.to_string().as_str()),
                    ("height", height.to_string().as_str()),
                    ("zoom", zoom.as_str()),
                ],
            ),
            Status::SlideshowStarted { seconds } => {
                i18n.tr_with_args("status-slideshow-started", &[("seconds", seconds.as_str())])
            }
            Status::SlideshowStopped => i18n.tr("status-slideshow-stopped"),
            Status::Fullscreen => i18n.tr("status-fullscreen"),
            Status::Windowed => i18n.tr("status-windowed"),
            Status::Error { message } => {
                i18n.tr_with_args("status-error", &[("message", message.as_str())])
            }
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error { .. })
    }
}
