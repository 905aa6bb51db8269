mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{FsOp, MockFileSystem};

use anyhow::Result;
use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::models::FsEntry;

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Lists the immediate entries of `dir` in the order the platform returns them.
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;

    async fn exists(&self, path: &Path) -> bool;

    /// Creates `dir` and every missing ancestor.
    async fn create_dir_all(&self, dir: &Path) -> io::Result<()>;

    /// Creates `file` with zero bytes, truncating any existing content.
    async fn write_empty(&self, file: &Path) -> io::Result<()>;

    async fn read_to_string(&self, file: &Path) -> io::Result<String>;
}
