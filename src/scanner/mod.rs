//! Video folder scanner.
//!
//! Walks a directory tree and returns it as [`FolderNode`]s, keeping only
//! video files. Entries are visited in file-name order so that repeated scans
//! of the same tree produce the same structure.

mod tree;

pub use tree::FolderNode;

use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};
use vidtree_common::{
    paths::{folder_name, is_video_file},
    Error, Result,
};
use walkdir::WalkDir;

/// Scan `root` and return its folder tree.
///
/// With `include_root` the result is a single node for `root` itself;
/// otherwise it is the list of `root`'s subfolders, and videos sitting
/// directly in `root` are not part of the result.
///
/// # Errors
///
/// Fails if `root` is not a directory, or if a directory listing fails for a
/// reason other than missing permissions. Folders that cannot be read because
/// of permissions are returned empty.
pub fn build_tree(root: &Path, include_root: bool) -> Result<Vec<FolderNode>> {
    let root = std::path::absolute(root)?;
    if !root.is_dir() {
        return Err(Error::NotADirectory(root));
    }
    // Resolve `..` and symlinks so written locations are canonical.
    let root = std::fs::canonicalize(&root)?;

    info!("Scanning directory: {:?}", root);
    let node = scan_folder(&root)?;
    info!(
        "Scan complete: {} videos in {} folders under {:?}",
        node.file_count(),
        node.folder_count(),
        root
    );

    if include_root {
        Ok(vec![node])
    } else {
        Ok(node.subfolders)
    }
}

fn scan_folder(path: &Path) -> Result<FolderNode> {
    let mut node = FolderNode::new(folder_name(path), path);

    // Symlinked directories are listed as plain entries and never descended into.
    let listing = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in listing {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_permission_denied(&err) => {
                warn!("Cannot read folder {:?}, leaving it empty: {}", path, err);
                return Ok(FolderNode::new(node.name, node.path));
            }
            Err(err) => {
                let failed = err.path().unwrap_or(path).to_path_buf();
                return Err(Error::listing(failed, err.into()));
            }
        };

        if entry.file_type().is_dir() {
            node.subfolders.push(scan_folder(entry.path())?);
        } else if is_video_file(entry.path()) {
            debug!("Found video: {:?}", entry.path());
            node.files.push(entry.into_path());
        }
    }

    Ok(node)
}

fn is_permission_denied(err: &walkdir::Error) -> bool {
    err.io_error()
        .map(|e| e.kind() == ErrorKind::PermissionDenied)
        .unwrap_or(false)
}
