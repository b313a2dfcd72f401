//! Run configuration — the static skip rules and the per-run options.
//!
//! Nothing here is read from disk or the environment: the skip lists are
//! fixed, and the options come straight from the command line.

use std::collections::HashSet;
use std::path::PathBuf;

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "PROJECT_STRUCTURE.txt";

/// Default recursion bound.
pub const DEFAULT_MAX_DEPTH: i64 = 5;

// ───────────────────────────────────────── skip rules ────────

/// Directory names that are never listed, wherever they appear in a path.
const SKIP_DIRS: &[&str] = &[
    "node_modules",
    "site-packages",
    ".git",
    ".webpack",
    "dist",
    "out",
    "build",
    "coverage",
    ".nyc_output",
    ".vscode",
    ".github",
    "vendor",
    "__pycache__",
    ".next",
    ".nuxt",
];

/// File suffixes that are never listed.  Matched case-sensitively against the
/// last extension, or against the end of the name for compound suffixes.
const SKIP_SUFFIXES: &[&str] = &[
    ".map", ".log", ".lock", ".chunk.js", ".woff", ".woff2", ".eot", ".ttf", ".otf", ".ico",
    ".png", ".jpg", ".jpeg", ".gif", ".svg",
];

/// The two exclusion sets.  Built once at startup and only ever borrowed.
#[derive(Debug, Clone)]
pub struct SkipRules {
    dirs: HashSet<String>,
    /// Single-dot suffixes such as `.png`, looked up by extension.
    extensions: HashSet<String>,
    /// Suffixes with more than one dot such as `.chunk.js`.
    compound: Vec<String>,
}

impl SkipRules {
    pub fn new<D, S>(dirs: D, suffixes: S) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let mut extensions = HashSet::new();
        let mut compound = Vec::new();
        for suffix in suffixes {
            let suffix: String = suffix.into();
            if suffix.matches('.').count() > 1 {
                compound.push(suffix);
            } else {
                extensions.insert(suffix);
            }
        }
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            extensions,
            compound,
        }
    }

    pub fn is_skipped_dir(&self, segment: &str) -> bool {
        self.dirs.contains(segment)
    }

    /// `ext` includes its leading dot, e.g. `".png"`.
    pub fn is_skipped_extension(&self, ext: &str) -> bool {
        self.extensions.contains(ext)
    }

    pub fn has_skipped_compound_suffix(&self, name: &str) -> bool {
        self.compound
            .iter()
            .any(|suffix| name.len() > suffix.len() && name.ends_with(suffix.as_str()))
    }
}

impl Default for SkipRules {
    fn default() -> Self {
        Self::new(SKIP_DIRS.iter().copied(), SKIP_SUFFIXES.iter().copied())
    }
}

// ───────────────────────────────────────── run options ───────

/// Options for a single render.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Optional header, written as `** <title> **`.
    pub title: Option<String>,
    /// Directories deeper than this are replaced by a placeholder line.
    /// Negative values put the placeholder in place of the root's children.
    pub max_depth: i64,
    /// Destination file.
    pub output: PathBuf,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: None,
            max_depth: DEFAULT_MAX_DEPTH,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
