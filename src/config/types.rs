use crate::playlist::{DEFAULT_OUTPUT, DEFAULT_TITLE};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub playlist: PlaylistConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistConfig {
    /// Text of the playlist's `<title>`
    #[serde(default = "default_title")]
    pub title: String,

    /// Output file name; ".xspf" is appended when missing
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolsConfig {
    /// Explicit ffprobe binary, tried before the bundled and PATH lookups
    #[serde(default)]
    pub ffprobe_path: Option<PathBuf>,
}
