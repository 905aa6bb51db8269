//! The two user-facing flows, shared by the subcommands and the interactive session.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::core::materialize::{MaterializeEvent, materialize};
use crate::core::parse::{ParseOptions, parse_notation};
use crate::core::render::write_tree;
use crate::core::walk::{PrintOptions, walk_dir};
use crate::error::{TreeforgeError, TreeforgeResult};
use crate::fs::FileSystem;

/// Prefix that marks a notation source as a file reference.
pub const FILE_PREFIX: &str = "file:";

/// Name printed above the tree: `.` for the current directory, else the last path component.
pub fn root_display_name(root_path: &Path) -> String {
    if root_path == Path::new(".") {
        return ".".to_owned();
    }

    root_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root_path.as_os_str().to_string_lossy().into_owned())
}

/// Walk `root` and write its tree, headed by the root's display name.
pub async fn print_tree<F, W>(
    fs: &F,
    root: &Path,
    options: &PrintOptions,
    writer: &mut W,
) -> anyhow::Result<()>
where
    F: FileSystem,
    W: Write,
{
    let tree = walk_dir(fs, root, options).await?;
    write_tree(writer, &root_display_name(root), &tree).context("cannot write tree")?;
    Ok(())
}

/// Resolve a `file:<path>` reference (or a bare path) to the path it names.
pub fn notation_path(source: &str) -> PathBuf {
    let path = source.strip_prefix(FILE_PREFIX).unwrap_or(source);
    PathBuf::from(path.trim())
}

/// Read notation text from a `file:<path>` reference or a bare path.
pub async fn load_notation<F: FileSystem>(fs: &F, source: &str) -> TreeforgeResult<String> {
    let path = notation_path(source);
    debug!("reading notation from {}", path.display());
    match fs.read_to_string(&path).await {
        Ok(text) => Ok(text),
        Err(source) => Err(TreeforgeError::InputRead { path, source }),
    }
}

/// Parse `text` and materialize it beneath `base`, writing one progress line
/// per created directory or file.
pub async fn create_tree<F, W>(
    fs: &F,
    base: &Path,
    text: &str,
    options: &ParseOptions,
    writer: &mut W,
) -> anyhow::Result<()>
where
    F: FileSystem,
    W: Write,
{
    let forest = parse_notation(text, options).map_err(TreeforgeError::from)?;

    let mut reported = Ok(());
    materialize(fs, base, &forest, &mut |event: &MaterializeEvent| {
        let created = matches!(
            event,
            MaterializeEvent::DirectoryCreated(_) | MaterializeEvent::FileCreated(_)
        );
        if created && reported.is_ok() {
            reported = writeln!(writer, "{event}");
        }
    })
    .await?;
    reported.context("cannot report progress")?;
    Ok(())
}
