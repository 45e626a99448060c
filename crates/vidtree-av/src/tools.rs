//! External tool detection.
//!
//! `ffprobe` is usually shipped next to the vidtree executable or in a `bin/`
//! folder beside the working directory, so lookup checks those before falling
//! back to `PATH`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Name of the media inspection tool used for duration probing.
pub const FFPROBE: &str = "ffprobe";

/// Relative folder searched for bundled tools.
const BIN_DIR: &str = "bin";

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Platform file name of an executable (`ffprobe.exe` on Windows).
pub fn executable_name(name: &str) -> String {
    if cfg!(windows) {
        format!("{name}.exe")
    } else {
        name.to_string()
    }
}

/// Directory holding the running executable, where bundled tools live.
pub fn bundled_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Locate a tool.
///
/// Checked in order: the configured path (if it exists), the bundled
/// directory next to the executable, `./bin`, then `PATH`.
pub fn locate_tool(name: &str, configured: Option<&Path>) -> Option<PathBuf> {
    let bin_dir = std::env::current_dir().ok().map(|cwd| cwd.join(BIN_DIR));
    locate_in(name, configured, bundled_dir().as_deref(), bin_dir.as_deref())
        .or_else(|| which::which(name).ok())
}

fn locate_in(
    name: &str,
    configured: Option<&Path>,
    bundled: Option<&Path>,
    bin_dir: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
    }

    let file_name = executable_name(name);
    [bundled, bin_dir]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file())
}

/// Check if a tool is available and get its version line.
///
/// ffmpeg tools print their version with `-version`.
pub fn check_tool(name: &str, configured: Option<&Path>) -> ToolInfo {
    let unavailable = || ToolInfo {
        name: name.to_string(),
        available: false,
        version: None,
        path: None,
    };

    let Some(path) = locate_tool(name, configured) else {
        return unavailable();
    };

    match Command::new(&path)
        .arg("-version")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
    {
        Ok(output) if output.status.success() => ToolInfo {
            name: name.to_string(),
            available: true,
            version: String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string()),
            path: Some(path),
        },
        _ => unavailable(),
    }
}
