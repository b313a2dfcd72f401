//! Filesystem access — list the immediate children of one directory.
//!
//! Listing never recurses; the tree builder drives recursion itself so it can
//! filter and pick branch glyphs per level.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::TreeError;

/// What an entry resolves to, following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Neither, e.g. a dangling symlink or a socket.
    Other,
}

/// A filesystem entry seen during one traversal.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    pub fn from_path(path: PathBuf) -> Self {
        let kind = match std::fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => EntryKind::Dir,
            Ok(meta) if meta.is_file() => EntryKind::File,
            _ => EntryKind::Other,
        };
        Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path,
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Immediate children of `dir`, sorted by file name (byte order,
/// case-sensitive).
///
/// Any read failure makes the whole directory [`TreeError::Unreadable`];
/// callers decide whether that matters.
pub fn list_children(dir: &Path) -> Result<Vec<Entry>, TreeError> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| TreeError::Unreadable {
            path: dir.to_path_buf(),
            source,
        })?;
        entries.push(Entry::from_path(entry.into_path()));
    }
    Ok(entries)
}
