mod entry;
mod notation;
mod tree;

pub use entry::{EntryKind, FsEntry};
pub use notation::{DepthLine, Entry, Forest};
pub use tree::{DirTree, TreeNode};
