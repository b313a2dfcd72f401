//! Path filter — decide whether an entry is noise.
//!
//! Rules, first match wins:
//! 1. any path segment names a skipped directory;
//! 2. for regular files, a skipped extension or compound suffix;
//! 3. for regular files, a leading dot.
//!
//! The dot rule deliberately ignores directories: a hidden directory is only
//! dropped when its name is in the skip list (`.git`, `.vscode`, ...).

use std::path::{Component, Path};

use super::fs::{Entry, EntryKind};
use crate::config::SkipRules;

#[derive(Debug, Clone, Copy)]
pub struct PathFilter<'a> {
    rules: &'a SkipRules,
}

impl<'a> PathFilter<'a> {
    pub fn new(rules: &'a SkipRules) -> Self {
        Self { rules }
    }

    /// `true` if `path` should be left out of the tree.
    ///
    /// Only touches the filesystem to tell files from everything else.
    #[allow(dead_code)]
    pub fn should_skip(&self, path: &Path) -> bool {
        self.skip(path, || path.is_file())
    }

    /// Same rules as [`should_skip`](Self::should_skip), using the kind
    /// already recorded on `entry` instead of another `stat`.
    pub fn should_skip_entry(&self, entry: &Entry) -> bool {
        self.skip(&entry.path, || entry.kind == EntryKind::File)
    }

    fn skip(&self, path: &Path, is_file: impl FnOnce() -> bool) -> bool {
        let in_skipped_dir = path.components().any(|c| match c {
            Component::Normal(seg) => self.rules.is_skipped_dir(&seg.to_string_lossy()),
            _ => false,
        });
        if in_skipped_dir {
            return true;
        }

        if is_file() {
            return self.is_noise_file(path);
        }

        false
    }

    fn is_noise_file(&self, path: &Path) -> bool {
        let name = match path.file_name() {
            Some(n) => n.to_string_lossy(),
            None => return false,
        };

        if let Some(ext) = path.extension() {
            if self
                .rules
                .is_skipped_extension(&format!(".{}", ext.to_string_lossy()))
            {
                return true;
            }
        }
        if self.rules.has_skipped_compound_suffix(&name) {
            return true;
        }

        name.starts_with('.')
    }
}
