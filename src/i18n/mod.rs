// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from config or system settings
//! - Embedded `.ftl` translation files
//! - Fallback to `en-US` when the requested locale is unavailable

pub mod fluent;
