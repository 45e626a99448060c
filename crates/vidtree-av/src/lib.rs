//! # vidtree-av
//!
//! Duration probing for video files through the `ffprobe` command-line tool.
//!
//! This crate provides:
//! - [`DurationProber`], the seam the playlist builder probes through
//! - [`FfprobeDurationProber`], which shells out to `ffprobe` for the first
//!   video stream's duration
//! - Tool discovery ([`tools::locate_tool`]) covering a configured path, the
//!   directory of the running executable, a `bin/` folder and `PATH`
//!
//! ## Features
//!
//! - `tracing` - Log probe failures at debug level
//!
//! ## Example
//!
//! ```no_run
//! use vidtree_av::{DurationProber, FfprobeDurationProber};
//!
//! let prober = FfprobeDurationProber::discover(None);
//! let millis = prober.duration_or_unknown("/videos/A/1.mp4".as_ref());
//! println!("{millis}");
//! ```

mod error;
pub mod probe;
pub mod tools;

// Re-exports
pub use error::{Error, Result};
pub use probe::{DurationProber, FfprobeDurationProber, UNKNOWN_DURATION_MS};
pub use tools::{check_tool, locate_tool, ToolInfo};
