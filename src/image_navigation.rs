// SPDX-License-Identifier: MPL-2.0
//! Image navigation module for managing the loaded image set and the
//! current position within it.
//!
//! Navigation wraps around in both directions. On an empty set every
//! operation is a silent no-op.

use crate::directory_scanner::ImageList;
use std::path::Path;

/// Manages navigation through a list of images in a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageNavigator {
    /// List of images in the current directory
    image_list: ImageList,
    /// Position of the current image; meaningless when the list is empty
    current_index: usize,
}

impl ImageNavigator {
    /// Creates a new empty `ImageNavigator`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole image set and moves to its first entry.
    pub fn replace(&mut self, image_list: ImageList) {
        self.image_list = image_list;
        self.current_index = 0;
    }

    /// Advances to the next image, wrapping to the first after the last.
    ///
    /// Returns the new index, or `None` when the set is empty.
    pub fn navigate_next(&mut self) -> Option<usize> {
        let len = self.image_list.len();
        if len == 0 {
            return None;
        }
        self.current_index = (self.current_index + 1) % len;
        Some(self.current_index)
    }

    /// Moves to the previous image, wrapping to the last before the first.
    ///
    /// Returns the new index, or `None` when the set is empty.
    pub fn navigate_previous(&mut self) -> Option<usize> {
        let len = self.image_list.len();
        if len == 0 {
            return None;
        }
        self.current_index = (self.current_index + len - 1) % len;
        Some(self.current_index)
    }

    /// Returns the current index, or `None` when the set is empty.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (!self.image_list.is_empty()).then_some(self.current_index)
    }

    /// Returns the path to the current image, if any.
    #[must_use]
    pub fn current_image_path(&self) -> Option<&Path> {
        self.image_list.get(self.current_index)
    }

    /// Returns the total number of images in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.image_list.len()
    }

    /// Checks if the image list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image_list.is_empty()
    }

    #[must_use]
    pub fn image_list(&self) -> &ImageList {
        &self.image_list
    }
}
