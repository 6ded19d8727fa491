// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and startup flags for the application.

use crate::config::Config;
use crate::ui::notifications;
use crate::ui::viewer::component;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    Notification(notifications::NotificationMessage),
    /// The main window opened or changed size.
    WindowResized {
        window: window::Id,
        size: Size,
    },
    /// Periodic tick driving toast auto-dismiss.
    Tick(Instant),
}

/// Startup data handed from `main` to the application.
#[derive(Debug, Default)]
pub struct Flags {
    pub config: Config,
    /// Human-readable reason the settings file was ignored, if it was.
    pub config_warning: Option<String>,
}
