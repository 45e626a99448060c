//! Path utilities for detecting video files and naming playlists.
//!
//! The extension set here decides which files become playlist tracks; the
//! scanner consults it for every directory entry that is not a directory.

use std::path::Path;

/// Video file extensions recognised by the scanner (compared lowercase).
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "wmv", "flv", "mpeg", "mpg"];

/// Extension given to written playlists.
pub const PLAYLIST_EXTENSION: &str = "xspf";

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use vidtree_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("movie.mkv")));
/// assert!(is_video_file(Path::new("/path/to/video.MPEG")));
/// assert!(!is_video_file(Path::new("readme.txt")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Display label for a folder: its base name, or an empty string for a
/// filesystem root.
pub fn folder_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Append `.xspf` to a playlist name unless it already ends with it
/// (case-insensitive).
///
/// # Examples
///
/// ```
/// use vidtree_common::paths::with_playlist_extension;
///
/// assert_eq!(with_playlist_extension("Movies"), "Movies.xspf");
/// assert_eq!(with_playlist_extension("Movies.XSPF"), "Movies.XSPF");
/// ```
pub fn with_playlist_extension(name: &str) -> String {
    let suffix = format!(".{PLAYLIST_EXTENSION}");
    if name.to_lowercase().ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{name}{suffix}")
    }
}
