//! vidtree - XSPF playlists that keep a video library's folder tree
//!
//! This library crate exposes the scanner, playlist builder and configuration
//! for the `vidtree` binary and for integration testing.

pub mod config;
pub mod playlist;
pub mod scanner;
