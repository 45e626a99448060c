use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vidtree")]
#[command(
    author,
    version,
    about = "Create an XSPF playlist that mirrors a folder tree of videos"
)]
pub struct Cli {
    /// Folder to scan (asked for interactively when omitted)
    pub folder: Option<PathBuf>,

    /// Playlist file name; ".xspf" is appended when missing
    #[arg(short, long)]
    pub output: Option<String>,

    /// Playlist title
    #[arg(long)]
    pub title: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Exit without waiting for Enter
    #[arg(long)]
    pub no_pause: bool,

    /// Check that ffprobe can be found and exit
    #[arg(long)]
    pub check_tools: bool,
}
