use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use log::debug;
use regex::RegexSet;

use crate::fs::FileSystem;
use crate::models::{DirTree, EntryKind, FsEntry, TreeNode};

/// Pre-compiled skip list.
/// Names match exactly. With globbing enabled, names containing `*` or `?`
/// become wildcard patterns instead.
pub struct SkipList {
    exact_matches: HashSet<String>,
    /// Compiled regex set for glob patterns with wildcards
    regex_set: Option<RegexSet>,
}

impl SkipList {
    /// Compile skip names into an exact-match list. Blank names are ignored.
    pub fn exact<S: AsRef<str>>(names: &[S]) -> Self {
        let exact_matches = names
            .iter()
            .map(|name| name.as_ref().trim())
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect();

        Self {
            exact_matches,
            regex_set: None,
        }
    }

    /// Compile skip names, treating any name with `*` or `?` as a glob.
    /// Returns an error if any glob pattern produces invalid regex.
    pub fn with_globs<S: AsRef<str>>(names: &[S]) -> anyhow::Result<Self> {
        let mut exact_matches = HashSet::new();
        let mut regex_patterns = Vec::new();

        for name in names {
            let p = name.as_ref().trim();
            if p.is_empty() {
                continue;
            }

            if p.contains('*') || p.contains('?') {
                regex_patterns.push(glob_to_regex(p));
            } else {
                exact_matches.insert(p.to_owned());
            }
        }

        let regex_set = if regex_patterns.is_empty() {
            None
        } else {
            Some(
                RegexSet::new(&regex_patterns)
                    .with_context(|| format!("Invalid skip pattern in {regex_patterns:?}"))?,
            )
        };

        Ok(Self {
            exact_matches,
            regex_set,
        })
    }

    /// Split a comma-separated list such as `node_modules, .git`.
    pub fn parse_list(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        if self.exact_matches.contains(name) {
            return true;
        }

        if let Some(ref regex_set) = self.regex_set {
            return regex_set.is_match(name);
        }

        false
    }
}

/// Convert a glob pattern to a regex string.
/// Supports `*` (any sequence) and `?` (single char) wildcards.
fn glob_to_regex(pattern: &str) -> String {
    let mut regex_pattern = String::with_capacity(pattern.len() * 2 + 2);
    regex_pattern.push('^');

    for c in pattern.chars() {
        match c {
            '*' => regex_pattern.push_str(".*"),
            '?' => regex_pattern.push('.'),
            // Escape regex special characters
            '.' | '+' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '\\' | '|' => {
                regex_pattern.push('\\');
                regex_pattern.push(c);
            }
            _ => regex_pattern.push(c),
        }
    }

    regex_pattern.push('$');
    regex_pattern
}

/// Order in which a directory's entries are printed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ListingOrder {
    /// Whatever order the filesystem listing returns.
    #[default]
    Native,
    /// Sorted by rendered name (directories include their trailing `/`).
    Sorted,
}

/// Which entry of a directory is drawn with the terminal branch glyph.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LastMarker {
    /// The last entry that is actually printed.
    #[default]
    Filtered,
    /// The last entry of the listing before skipping. When that entry is
    /// skipped, no printed entry gets the terminal glyph.
    Raw,
}

#[derive(Debug, Clone, Default)]
pub struct PrintOptions {
    /// Entry names to leave out, along with everything beneath them.
    pub skip: Vec<String>,
    /// Treat skip names containing `*` or `?` as globs rather than literal names.
    pub glob_skip: bool,
    pub order: ListingOrder,
    pub last_marker: LastMarker,
}

/// Walk a directory tree with the given options.
///
/// Any listing failure aborts the walk.
pub async fn walk_dir<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &PrintOptions,
) -> anyhow::Result<DirTree> {
    let skip = if options.glob_skip {
        SkipList::with_globs(options.skip.as_slice())?
    } else {
        SkipList::exact(options.skip.as_slice())
    };
    let children = walk_dir_internal(fs, dir, options, &skip).await?;
    Ok(DirTree { children })
}

async fn walk_dir_internal<F: FileSystem>(
    fs: &F,
    dir: &Path,
    options: &PrintOptions,
    skip: &SkipList,
) -> anyhow::Result<Vec<TreeNode>> {
    let entries = fs
        .read_dir(dir)
        .await
        .with_context(|| format!("cannot list {}", dir.display()))?;
    debug!("listed {} entries in {}", entries.len(), dir.display());

    let mut entries_with_rendered: Vec<(String, FsEntry)> = entries
        .into_iter()
        .map(|entry| (rendered_name(&entry.name, entry.kind), entry))
        .collect();

    if options.order == ListingOrder::Sorted {
        entries_with_rendered.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    let listed = entries_with_rendered.len();
    let visible: Vec<(usize, String, FsEntry)> = entries_with_rendered
        .into_iter()
        .enumerate()
        .filter(|(_, (_, entry))| !skip.matches(&entry.name))
        .map(|(index, (rendered, entry))| (index, rendered, entry))
        .collect();
    let shown = visible.len();

    let mut children = Vec::with_capacity(shown);
    for (position, (index, rendered, entry)) in visible.into_iter().enumerate() {
        let last = match options.last_marker {
            LastMarker::Filtered => position + 1 == shown,
            LastMarker::Raw => index + 1 == listed,
        };

        let mut node = TreeNode {
            name: rendered,
            kind: entry.kind,
            last,
            children: Vec::new(),
        };

        // Linked directories are shown as directories but never followed.
        if entry.kind == EntryKind::Directory {
            node.children =
                Box::pin(walk_dir_internal(fs, &entry.path, options, skip)).await?;
        }

        children.push(node);
    }

    Ok(children)
}

fn rendered_name(name: &str, kind: EntryKind) -> String {
    match kind {
        EntryKind::Directory | EntryKind::DirSymlink => format!("{name}/"),
        EntryKind::File | EntryKind::Symlink | EntryKind::Other => name.to_owned(),
    }
}
