//! vidtree-common: shared error type and path utilities.
//!
//! - **Error Handling**: the [`Error`] enum used by the scanner and the
//!   playlist writer, plus a [`Result`] alias
//! - **Path Utilities**: video-extension detection, folder display names and
//!   playlist file naming
//!
//! # Examples
//!
//! ```
//! use vidtree_common::paths::{is_video_file, with_playlist_extension};
//! use std::path::Path;
//!
//! assert!(is_video_file(Path::new("movie.MKV")));
//! assert_eq!(with_playlist_extension("Playlist"), "Playlist.xspf");
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, Result};
