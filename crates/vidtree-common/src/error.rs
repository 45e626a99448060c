//! Common error types used throughout vidtree.
//!
//! Covers the failures that can stop a playlist run: a root folder that is
//! not a directory, a directory listing that fails for a reason other than
//! access restriction, paths that cannot be expressed as `file://` URIs, and
//! XML or I/O errors while writing the playlist.

use std::path::PathBuf;

/// Common error type for vidtree.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The folder to scan does not exist or is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A directory could not be listed.
    #[error("Failed to list {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A path could not be converted to a `file://` URI.
    #[error("Cannot build a file URI for {}", .0.display())]
    InvalidPath(PathBuf),

    /// Writing the XML document failed.
    #[error("XML error: {0}")]
    Xml(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new Listing error.
    pub fn listing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Listing {
            path: path.into(),
            source,
        }
    }

    /// Create a new Xml error.
    pub fn xml<S: ToString>(err: S) -> Self {
        Self::Xml(err.to_string())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
