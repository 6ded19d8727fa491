// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting image files.
//!
//! This module lists the immediate entries of a folder, keeps the files
//! with a supported image extension, and sorts them by path.

use crate::error::{Error, Result};
use crate::media;
use std::io;
use std::path::{Path, PathBuf};

/// An ordered list of image files found in one directory.
///
/// Paths are sorted with `Ord for PathBuf`. Since every entry shares the
/// same parent this is byte order on the file name, so uppercase names
/// sort before lowercase ones (`B.PNG` < `a.png`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageList {
    image_files: Vec<PathBuf>,
}

impl ImageList {
    /// Creates a new empty `ImageList`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from arbitrary paths, keeping only supported images
    /// and applying the same ordering as a directory scan.
    #[must_use]
    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut image_files: Vec<PathBuf> = paths
            .into_iter()
            .filter(|path| media::is_supported_image(path))
            .collect();
        image_files.sort();
        Self { image_files }
    }

    /// Scans a directory (non-recursively) for supported image files.
    ///
    /// Returns an error if the directory cannot be read. Entries that fail
    /// to read are logged and skipped.
    pub fn scan_directory(directory: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(directory)?.map(|entry| entry.map(|e| e.path()));
        let mut image_files: Vec<PathBuf> = readable_entries(directory, entries)
            .filter(|path| path.is_file() && media::is_supported_image(path))
            .collect();

        image_files.sort();

        Ok(Self { image_files })
    }

    /// Returns the path at the specified index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.image_files.get(index).map(PathBuf::as_path)
    }

    /// Returns the total number of images in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    /// Checks if the image list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.image_files.iter().map(PathBuf::as_path)
    }
}

/// Drops entries that could not be read, logging each one.
fn readable_entries<'a>(
    directory: &'a Path,
    entries: impl IntoIterator<Item = io::Result<PathBuf>> + 'a,
) -> impl Iterator<Item = PathBuf> + 'a {
    entries.into_iter().filter_map(move |entry| match entry {
        Ok(path) => Some(path),
        Err(err) => {
            log::warn!("skipping unreadable entry in {}: {err}", directory.display());
            None
        }
    })
}

/// Scans `directory` on tokio's blocking pool.
pub async fn scan_directory_async(directory: PathBuf) -> Result<ImageList> {
    tokio::task::spawn_blocking(move || {
        let started = std::time::Instant::now();
        let result = ImageList::scan_directory(&directory);
        if let Ok(list) = &result {
            log::debug!(
                "scanned {} ({} images) in {:?}",
                directory.display(),
                list.len(),
                started.elapsed()
            );
        }
        result
    })
    .await
    .map_err(|err| Error::Io(format!("scan task failed: {err}")))?
}
