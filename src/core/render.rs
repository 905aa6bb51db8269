use std::io::{self, Write};

use crate::models::{DirTree, TreeNode};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Write the root name followed by the tree beneath it.
pub fn write_tree<W: Write>(writer: &mut W, root_name: &str, tree: &DirTree) -> io::Result<()> {
    writeln!(writer, "{root_name}")?;
    write_children(writer, &tree.children)
}

pub fn write_children<W: Write>(writer: &mut W, children: &[TreeNode]) -> io::Result<()> {
    write_children_inner(writer, children, "")
}

fn write_children_inner<W: Write>(
    writer: &mut W,
    children: &[TreeNode],
    prefix: &str,
) -> io::Result<()> {
    for node in children {
        let marker = if node.last { LAST_BRANCH } else { BRANCH };
        writeln!(writer, "{prefix}{marker}{}", node.name)?;

        if !node.children.is_empty() {
            let extension = if node.last { SPACE } else { PIPE };
            write_children_inner(writer, &node.children, &format!("{prefix}{extension}"))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    fn node(name: &str, last: bool, children: Vec<TreeNode>) -> TreeNode {
        let kind = if name.ends_with('/') {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        TreeNode {
            name: name.to_owned(),
            kind,
            last,
            children,
        }
    }

    #[test]
    fn renders_branches_and_prefixes() {
        let tree = DirTree {
            children: vec![
                node(
                    "src/",
                    false,
                    vec![
                        node("main.rs", false, vec![]),
                        node("util/", true, vec![node("io.rs", true, vec![])]),
                    ],
                ),
                node(
                    "docs/",
                    true,
                    vec![node("a.md", false, vec![]), node("b.md", true, vec![])],
                ),
            ],
        };

        let mut out = Vec::new();
        write_tree(&mut out, "project", &tree).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(
            out,
            concat!(
                "project\n",
                "├── src/\n",
                "│   ├── main.rs\n",
                "│   └── util/\n",
                "│       └── io.rs\n",
                "└── docs/\n",
                "    ├── a.md\n",
                "    └── b.md\n",
            )
        );
    }

    #[test]
    fn non_terminal_last_entry_keeps_pipe_prefix() {
        let children = vec![node("a/", false, vec![node("b", true, vec![])])];

        let mut out = Vec::new();
        write_children(&mut out, &children).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(out, "├── a/\n│   └── b\n");
    }

    #[test]
    fn empty_tree_prints_only_root() {
        let mut out = Vec::new();
        write_tree(&mut out, ".", &DirTree::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ".\n");
    }
}
