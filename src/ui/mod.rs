// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - The browser screen and its state machine
//! - [`state`] - Reusable state pieces (zoom, viewport, slideshow)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
pub mod viewer;
