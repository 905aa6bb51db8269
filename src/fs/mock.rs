use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::FsEntry;

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(String),
}

/// Every call made against the mock, in order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FsOp {
    ReadDir(PathBuf),
    CreateDirAll(PathBuf),
    WriteEmpty(PathBuf),
    ReadToString(PathBuf),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    failures: HashMap<PathBuf, String>,
    ops: Vec<FsOp>,
}

impl Inner {
    fn fail_if_set(&self, path: &Path) -> io::Result<()> {
        match self.failures.get(path) {
            Some(message) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                message.clone(),
            )),
            None => Ok(()),
        }
    }
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(dir.into(), Response::Ok(entries));
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::Err(message.into()));
    }

    pub fn add_dir(&self, dir: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.dirs.insert(dir.into());
    }

    pub fn set_file(&self, file: impl Into<PathBuf>, contents: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.files.insert(file.into(), contents.into());
    }

    /// Makes any write or read of `path` fail with `message`.
    pub fn fail_on(&self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.failures.insert(path.into(), message.into());
    }

    pub fn ops(&self) -> Vec<FsOp> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.ops.clone()
    }

    pub fn dirs(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.dirs.iter().cloned().collect()
    }

    pub fn file(&self, file: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.files.get(file.as_ref()).cloned()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.ops.push(FsOp::ReadDir(dir.to_path_buf()));

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }

    async fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.dirs.contains(path) || inner.files.contains_key(path)
    }

    async fn create_dir_all(&self, dir: &Path) -> io::Result<()> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.ops.push(FsOp::CreateDirAll(dir.to_path_buf()));
        inner.fail_if_set(dir)?;

        let mut current = Some(dir);
        while let Some(path) = current {
            if path.as_os_str().is_empty() {
                break;
            }
            inner.dirs.insert(path.to_path_buf());
            current = path.parent();
        }
        Ok(())
    }

    async fn write_empty(&self, file: &Path) -> io::Result<()> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.ops.push(FsOp::WriteEmpty(file.to_path_buf()));
        inner.fail_if_set(file)?;
        inner.files.insert(file.to_path_buf(), String::new());
        Ok(())
    }

    async fn read_to_string(&self, file: &Path) -> io::Result<String> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.ops.push(FsOp::ReadToString(file.to_path_buf()));
        inner.fail_if_set(file)?;
        inner.files.get(file).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock file at {}", file.display()),
            )
        })
    }
}
