//! Playlist assembly.
//!
//! [`create_xspf_playlist`] is the whole run: scan the folder, number the
//! videos, probe their durations and write the XSPF document.

pub mod tracks;
pub mod xspf;

pub use tracks::{assign_track_ids, Track, TrackId, TrackNode};

use crate::scanner::{self, FolderNode};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;
use vidtree_av::{DurationProber, UNKNOWN_DURATION_MS};
use vidtree_common::{paths::with_playlist_extension, Error, Result};

/// Title written when none is configured.
pub const DEFAULT_TITLE: &str = "Lista de reprodução";

/// Output file name used when none is configured.
pub const DEFAULT_OUTPUT: &str = "Playlist.xspf";

/// A track ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistTrack {
    pub id: TrackId,
    pub path: PathBuf,
    /// `file://` URI of `path`.
    pub location: Url,
    /// Duration in milliseconds, or [`UNKNOWN_DURATION_MS`].
    pub duration_ms: i64,
}

/// The flat track list plus the folder tree that refers into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub title: String,
    pub tracks: Vec<PlaylistTrack>,
    pub nodes: Vec<TrackNode>,
}

impl Playlist {
    /// Number tracks in `forest`, resolve their locations and probe each
    /// duration once, in id order.
    pub fn build<P: DurationProber>(
        title: impl Into<String>,
        forest: &[FolderNode],
        prober: &P,
    ) -> Result<Self> {
        let mut assigned = Vec::new();
        let nodes = assign_track_ids(forest, &mut assigned);

        let tracks = assigned
            .into_iter()
            .map(|Track { id, path }| {
                let location = file_uri(&path)?;
                let duration_ms = prober.duration_or_unknown(&path);
                debug!("Track {}: {} ({} ms)", id, location, duration_ms);
                Ok(PlaylistTrack {
                    id,
                    path,
                    location,
                    duration_ms,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            title: title.into(),
            tracks,
            nodes,
        })
    }

    /// Tracks whose duration could not be probed.
    pub fn unknown_durations(&self) -> usize {
        self.tracks
            .iter()
            .filter(|t| t.duration_ms == UNKNOWN_DURATION_MS)
            .count()
    }
}

/// `file://` URI for an absolute path, percent-encoded.
pub fn file_uri(path: &Path) -> Result<Url> {
    Url::from_file_path(path).map_err(|()| Error::InvalidPath(path.to_path_buf()))
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSummary {
    /// The written playlist file.
    pub output: PathBuf,
    pub tracks: usize,
    /// Folders written as `vlc:node` elements.
    pub folders: usize,
    pub unknown_durations: usize,
}

/// Scan `root` and write its playlist to `output`.
///
/// `.xspf` is appended to `output` unless already present. The folder itself
/// is not a playlist node: its subfolders become the top-level nodes.
pub fn create_xspf_playlist<P: DurationProber>(
    root: &Path,
    output: &str,
    title: &str,
    prober: &P,
) -> Result<PlaylistSummary> {
    let output = PathBuf::from(with_playlist_extension(output));

    let forest = scanner::build_tree(root, false)?;
    let folders: usize = forest.iter().map(|f| 1 + f.folder_count()).sum();

    info!("Probing durations with {}", prober.name());
    let playlist = Playlist::build(title, &forest, prober)?;

    let mut writer = BufWriter::new(File::create(&output)?);
    xspf::write_playlist(&playlist, &mut writer)?;
    writer.flush()?;

    let summary = PlaylistSummary {
        output,
        tracks: playlist.tracks.len(),
        folders,
        unknown_durations: playlist.unknown_durations(),
    };
    info!(
        "Wrote {:?}: {} tracks, {} folders, {} unknown durations",
        summary.output, summary.tracks, summary.folders, summary.unknown_durations
    );

    Ok(summary)
}
