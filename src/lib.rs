// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a folder image browser built with the Iced GUI framework.
//!
//! Pick a folder and browse its images one at a time, scaled to fit the
//! window, with zoom, wraparound navigation, a timed slideshow and
//! fullscreen mode.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod image_navigation;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
