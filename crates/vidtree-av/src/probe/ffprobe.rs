//! FFprobe-based duration probing.
//!
//! Runs `ffprobe -v error -select_streams v:0 -show_entries stream=duration
//! -of default=noprint_wrappers=1:nokey=1 <file>`, which prints the bare
//! duration of the first video stream in seconds.

use super::DurationProber;
use crate::tools::{executable_name, locate_tool, FFPROBE};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A prober backed by the `ffprobe` CLI.
#[derive(Debug, Clone)]
pub struct FfprobeDurationProber {
    /// Path to the ffprobe binary.
    ffprobe_path: PathBuf,
}

impl FfprobeDurationProber {
    /// Create a new prober using the given ffprobe path.
    pub fn new(ffprobe_path: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
        }
    }

    /// Create a prober from the first ffprobe found by [`locate_tool`].
    ///
    /// When nothing is found the bare executable name is kept, so every probe
    /// fails and tracks get an unknown duration.
    pub fn discover(configured: Option<&Path>) -> Self {
        let path = locate_tool(FFPROBE, configured)
            .unwrap_or_else(|| PathBuf::from(executable_name(FFPROBE)));
        Self::new(path)
    }

    /// Path of the ffprobe binary this prober runs.
    pub fn path(&self) -> &Path {
        &self.ffprobe_path
    }
}

impl DurationProber for FfprobeDurationProber {
    fn name(&self) -> &'static str {
        FFPROBE
    }

    fn probe_duration_ms(&self, path: &Path) -> Result<i64> {
        let output = Command::new(&self.ffprobe_path)
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(FFPROBE)
                } else {
                    Error::Io(e)
                }
            })?;

        if !output.status.success() {
            return Err(Error::tool_failed(
                FFPROBE,
                format!("exited with {}", output.status),
            ));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| Error::parse_error(FFPROBE, format!("Invalid UTF-8: {}", e)))?;

        parse_duration_output(&stdout)
    }
}

/// Convert ffprobe's seconds output to whole milliseconds, truncating.
fn parse_duration_output(stdout: &str) -> Result<i64> {
    let text = stdout.trim();
    let seconds: f64 = text
        .parse()
        .map_err(|_| Error::parse_error(FFPROBE, format!("not a duration: {:?}", text)))?;

    if !seconds.is_finite() {
        return Err(Error::parse_error(
            FFPROBE,
            format!("not a finite duration: {}", text),
        ));
    }

    Ok((seconds * 1000.0).trunc() as i64)
}
