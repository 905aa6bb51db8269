use std::fmt;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{TreeforgeError, TreeforgeResult};
use crate::fs::FileSystem;
use crate::models::Entry;

/// A side effect performed (or deliberately not performed) while materializing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MaterializeEvent {
    DirectoryCreated(PathBuf),
    /// The directory was already present and was left as is.
    DirectoryExists(PathBuf),
    FileCreated(PathBuf),
    /// An entry without a name under this base directory.
    Skipped(PathBuf),
}

impl fmt::Display for MaterializeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryCreated(path) => write!(f, "Creating directory: {}", path.display()),
            Self::DirectoryExists(path) => write!(f, "Directory exists: {}", path.display()),
            Self::FileCreated(path) => write!(f, "Creating file: {}", path.display()),
            Self::Skipped(path) => write!(f, "Skipping unnamed entry in: {}", path.display()),
        }
    }
}

/// Create every directory and empty file of `entries` beneath `base`.
///
/// Existing directories are left untouched and existing files are truncated.
/// Nothing on disk is ever removed. The first failure aborts the run without
/// undoing what was already created.
pub async fn materialize<F, O>(
    fs: &F,
    base: &Path,
    entries: &[Entry],
    observer: &mut O,
) -> TreeforgeResult<()>
where
    F: FileSystem,
    O: FnMut(&MaterializeEvent),
{
    for entry in entries {
        if entry.name.is_empty() {
            warn!("skipping entry without a name under {}", base.display());
            observer(&MaterializeEvent::Skipped(base.to_path_buf()));
            continue;
        }

        if entry.is_dir() {
            let dir = base.join(entry.bare_name());
            ensure_dir(fs, &dir, observer).await?;
            Box::pin(materialize(fs, &dir, &entry.children, observer)).await?;
        } else {
            let file = base.join(&entry.name);
            fs.write_empty(&file)
                .await
                .map_err(|source| TreeforgeError::FilesystemWrite {
                    path: file.clone(),
                    source,
                })?;
            info!("created file {}", file.display());
            observer(&MaterializeEvent::FileCreated(file));
        }
    }

    Ok(())
}

async fn ensure_dir<F, O>(fs: &F, dir: &Path, observer: &mut O) -> TreeforgeResult<()>
where
    F: FileSystem,
    O: FnMut(&MaterializeEvent),
{
    if fs.exists(dir).await {
        info!("directory {} exists, leaving it untouched", dir.display());
        observer(&MaterializeEvent::DirectoryExists(dir.to_path_buf()));
        return Ok(());
    }

    fs.create_dir_all(dir)
        .await
        .map_err(|source| TreeforgeError::FilesystemWrite {
            path: dir.to_path_buf(),
            source,
        })?;
    info!("created directory {}", dir.display());
    observer(&MaterializeEvent::DirectoryCreated(dir.to_path_buf()));
    Ok(())
}
