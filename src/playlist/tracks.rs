//! Track id assignment.
//!
//! Ids are handed out in pre-order: a folder's own files first, then each
//! subfolder in turn. The same pass records which ids belong to which folder,
//! so the flat track list and the folder tree cannot disagree.

use crate::scanner::FolderNode;
use std::path::PathBuf;

/// Dense, zero-based track identifier.
pub type TrackId = usize;

/// A video file and the id it was assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub path: PathBuf,
}

/// A folder in the playlist tree, referring to its files by track id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackNode {
    pub title: String,
    pub track_ids: Vec<TrackId>,
    pub children: Vec<TrackNode>,
}

impl TrackNode {
    /// True when the folder holds no tracks and no subfolders.
    pub fn is_empty(&self) -> bool {
        self.track_ids.is_empty() && self.children.is_empty()
    }
}

/// Append a track for every file in `forest` to `tracks` and return the
/// matching node tree.
///
/// Each new id is the length of `tracks` at the time the file is reached, so
/// starting from an empty list gives ids `0..n` in pre-order.
pub fn assign_track_ids(forest: &[FolderNode], tracks: &mut Vec<Track>) -> Vec<TrackNode> {
    forest.iter().map(|folder| assign(folder, tracks)).collect()
}

fn assign(folder: &FolderNode, tracks: &mut Vec<Track>) -> TrackNode {
    let track_ids = folder
        .files
        .iter()
        .map(|path| {
            let id = tracks.len();
            tracks.push(Track {
                id,
                path: path.clone(),
            });
            id
        })
        .collect();

    let children = assign_track_ids(&folder.subfolders, tracks);

    TrackNode {
        title: folder.name.clone(),
        track_ids,
        children,
    }
}
