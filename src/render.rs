//! Renderer — write the title, root line and tree to the output file.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{RenderOptions, SkipRules};
use crate::core::filter::PathFilter;
use crate::core::tree::TreeBuilder;
use crate::error::TreeError;

/// What a finished render reports back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub output: PathBuf,
    /// Lines in the written file, counting a final unterminated line.
    pub line_count: usize,
}

/// Render the tree under `root` into `opts.output`, truncating it first.
///
/// The output file is created before the walk, so when it lives under `root`
/// it shows up in its own tree on every run alike.  On a write error the
/// partially written file is left in place.
pub fn render(
    root: &Path,
    rules: &SkipRules,
    opts: &RenderOptions,
) -> Result<RenderReport, TreeError> {
    let io_err = |source: io::Error| TreeError::Io {
        path: opts.output.clone(),
        source,
    };

    {
        let mut out = BufWriter::new(File::create(&opts.output).map_err(io_err)?);
        let lines = TreeBuilder::new(PathFilter::new(rules), opts.max_depth).build(root);
        tracing::debug!(entries = lines.len(), root = %root.display(), "tree built");
        write_tree(&mut out, opts.title.as_deref(), &root_name(root), &lines).map_err(io_err)?;
    }

    let line_count = fs::read_to_string(&opts.output)
        .map_err(io_err)?
        .lines()
        .count();

    Ok(RenderReport {
        output: opts.output.clone(),
        line_count,
    })
}

fn write_tree<W: Write>(
    out: &mut W,
    title: Option<&str>,
    root_name: &str,
    lines: &[String],
) -> io::Result<()> {
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        write!(out, "** {title} **\n\n")?;
    }
    writeln!(out, "{root_name}/")?;
    out.write_all(lines.join("\n").as_bytes())?;
    out.flush()
}

/// Base name of the resolved root; `.` resolves to the working directory.
fn root_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
