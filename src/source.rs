// SPDX-License-Identifier: MPL-2.0
//! Image resource locators.

use iced::widget::image::Handle;
use std::path::PathBuf;

/// Reference to an image resource. Immutable input to the element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    uri: String,
}

impl Source {
    /// Creates a source from a locator string (plain path or `file://` URI).
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// The raw locator.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Filesystem path for file-backed locators, `None` for remote schemes
    /// (those need a host-provided prober).
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        if let Some(stripped) = self.uri.strip_prefix("file://") {
            return Some(PathBuf::from(stripped));
        }
        if self.uri.contains("://") {
            return None;
        }
        Some(PathBuf::from(&self.uri))
    }

    /// Handle for the iced image widget.
    #[must_use]
    pub fn handle(&self) -> Handle {
        match self.path() {
            Some(path) => Handle::from_path(path),
            None => Handle::from_path(&self.uri),
        }
    }
}

impl From<&str> for Source {
    fn from(uri: &str) -> Self {
        Source::new(uri)
    }
}

impl From<String> for Source {
    fn from(uri: String) -> Self {
        Source::new(uri)
    }
}
