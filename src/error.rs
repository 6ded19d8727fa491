// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Errors travel inside iced messages, so every variant owns a plain
//! `String` payload and the type is `Clone`.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Filesystem access failed (folder listing, file read).
    #[error("I/O error: {0}")]
    Io(String),

    /// The file was read but could not be decoded as an image.
    #[error("{0}")]
    Decode(String),

    /// The settings file exists but could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the raw detail message without the category prefix.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            Error::Io(msg) | Error::Decode(msg) | Error::Config(msg) => msg,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
