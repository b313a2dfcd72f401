//! Error types shared by the traversal and the writer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    /// A directory could not be listed (permission denied, vanished, ...).
    #[error("cannot read directory {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The output file could not be created, written or re-read.
    #[error("cannot write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
