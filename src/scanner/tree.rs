use std::path::PathBuf;

/// One scanned directory.
///
/// `subfolders` and `files` are each sorted by entry name. `files` only holds
/// video files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    /// Display label, the directory's base name.
    pub name: String,
    /// Absolute path of the directory.
    pub path: PathBuf,
    pub subfolders: Vec<FolderNode>,
    /// Absolute paths of the video files directly inside this directory.
    pub files: Vec<PathBuf>,
}

impl FolderNode {
    /// Create a node with no files and no subfolders.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            subfolders: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Number of video files in this folder and all of its descendants.
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .subfolders
                .iter()
                .map(FolderNode::file_count)
                .sum::<usize>()
    }

    /// Number of folders below this one, not counting itself.
    pub fn folder_count(&self) -> usize {
        self.subfolders
            .iter()
            .map(|sub| 1 + sub.folder_count())
            .sum()
    }
}
