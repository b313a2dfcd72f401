//! Tree builder — turn a directory into box-drawing tree lines.
//!
//! Output is depth-first pre-order with siblings in byte order.  Each level is
//! filtered *before* the last sibling is picked, so the `└── ` glyph always
//! lands on the last entry actually shown.

use std::path::Path;

use super::filter::PathFilter;
use super::fs::list_children;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";
const DEPTH_PLACEHOLDER: &str = "... (max depth reached)";

#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'a> {
    filter: PathFilter<'a>,
    max_depth: i64,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(filter: PathFilter<'a>, max_depth: i64) -> Self {
        Self { filter, max_depth }
    }

    /// Tree lines for everything under `root`, excluding the root line itself.
    pub fn build(&self, root: &Path) -> Vec<String> {
        let mut lines = Vec::new();
        self.walk(root, "", 0, &mut lines);
        lines
    }

    fn walk(&self, dir: &Path, indent: &str, depth: i64, out: &mut Vec<String>) {
        if depth > self.max_depth {
            out.push(format!("{BLANK_INDENT}{indent}{DEPTH_PLACEHOLDER}"));
            return;
        }

        let children = match list_children(dir) {
            Ok(children) => children,
            Err(err) => {
                tracing::debug!("skipping subtree: {err}");
                return;
            }
        };

        let kept: Vec<_> = children
            .into_iter()
            .filter(|entry| !self.filter.should_skip_entry(entry))
            .collect();

        let count = kept.len();
        for (i, entry) in kept.iter().enumerate() {
            let is_last = i + 1 == count;
            let branch = if is_last { LAST_BRANCH } else { BRANCH };
            out.push(format!("{indent}{branch}{}", entry.name));

            if entry.is_dir() {
                let extension = if is_last { BLANK_INDENT } else { PIPE_INDENT };
                let child_indent = format!("{indent}{extension}");
                self.walk(&entry.path, &child_indent, depth + 1, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SkipRules;
    use std::fs;
    use tempfile::tempdir;

    fn build(root: &Path, max_depth: i64) -> Vec<String> {
        let rules = SkipRules::default();
        TreeBuilder::new(PathFilter::new(&rules), max_depth).build(root)
    }

    fn write(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn scenario_drops_noise_at_root() {
        let dir = tempdir().unwrap();
        write(dir.path(), "src/main.txt");
        write(dir.path(), "node_modules/pkg/index.js");
        write(dir.path(), ".hidden");
        write(dir.path(), "image.png");

        assert_eq!(build(dir.path(), 5), vec!["└── src", "    └── main.txt"]);
    }

    #[test]
    fn exactly_one_last_glyph_per_level() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.txt");
        write(dir.path(), "b.txt");
        write(dir.path(), "c.txt");
        // Sorts last but is filtered, so `c.txt` must carry the last glyph.
        write(dir.path(), "z.log");

        let lines = build(dir.path(), 5);
        assert_eq!(lines, vec!["├── a.txt", "├── b.txt", "└── c.txt"]);
        assert_eq!(lines.iter().filter(|l| l.starts_with(LAST_BRANCH)).count(), 1);
    }

    #[test]
    fn nested_indent_uses_pipe_for_open_siblings() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a/inner.txt");
        write(dir.path(), "b/deep/leaf.txt");

        assert_eq!(
            build(dir.path(), 5),
            vec![
                "├── a",
                "│   └── inner.txt",
                "└── b",
                "    └── deep",
                "        └── leaf.txt",
            ]
        );
    }

    #[test]
    fn max_depth_zero_emits_placeholder() {
        let dir = tempdir().unwrap();
        write(dir.path(), "sub/file.txt");

        assert_eq!(
            build(dir.path(), 0),
            vec!["└── sub", "        ... (max depth reached)"]
        );
    }

    #[test]
    fn negative_max_depth_replaces_root_listing() {
        let dir = tempdir().unwrap();
        write(dir.path(), "sub/file.txt");
        write(dir.path(), "top.txt");

        assert_eq!(build(dir.path(), -1), vec!["    ... (max depth reached)"]);
    }

    #[test]
    fn placeholder_under_open_sibling() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        write(dir.path(), "b.txt");

        assert_eq!(
            build(dir.path(), 0),
            vec!["├── a", "    │   ... (max depth reached)", "└── b.txt"]
        );
    }

    #[test]
    fn empty_dirs_emit_nothing() {
        let dir = tempdir().unwrap();
        assert!(build(dir.path(), 5).is_empty());

        fs::create_dir(dir.path().join("empty")).unwrap();
        assert_eq!(build(dir.path(), 5), vec!["└── empty"]);
    }

    #[test]
    fn hidden_dir_is_listed() {
        let dir = tempdir().unwrap();
        write(dir.path(), ".cache/data.txt");
        write(dir.path(), ".git/HEAD");

        assert_eq!(build(dir.path(), 5), vec!["└── .cache", "    └── data.txt"]);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let dir = tempdir().unwrap();
        assert!(build(&dir.path().join("gone"), 5).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdir_is_swallowed() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        write(dir.path(), "locked/secret.txt");
        write(dir.path(), "open.txt");
        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let readable = fs::read_dir(&locked).is_ok();
        let lines = build(dir.path(), 5);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if readable {
            // Running as root: permission bits are not enforced.
            return;
        }
        assert_eq!(lines, vec!["├── locked", "└── open.txt"]);
        assert!(!lines.iter().any(|l| l.contains("secret.txt")));
    }
}
