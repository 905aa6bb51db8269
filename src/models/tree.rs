use super::EntryKind;

/// A node of a printed directory tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeNode {
    /// Display name; directories carry a trailing `/`.
    pub name: String,
    pub kind: EntryKind,
    /// Drawn with the terminal branch glyph.
    pub last: bool,
    pub children: Vec<TreeNode>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirTree {
    pub children: Vec<TreeNode>,
}
