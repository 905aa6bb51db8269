use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading notation or writing a tree to disk.
#[derive(Error, Debug)]
pub enum TreeforgeError {
    /// A notation file referenced by the user could not be read.
    #[error("cannot read notation file '{path}': {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating a directory or file failed. Nothing already created is rolled back.
    #[error("cannot create '{path}': {source}")]
    FilesystemWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Notation(#[from] NotationError),
}

/// Rejections raised by the parser in strict mode.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum NotationError {
    #[error("line {line}: no name found in '{text}'")]
    MissingName { line: usize, text: String },

    #[error("line {line}: '{name}' is indented by {found}, expected {expected}")]
    InconsistentIndent {
        line: usize,
        name: String,
        expected: usize,
        found: usize,
    },
}

pub type TreeforgeResult<T> = Result<T, TreeforgeError>;
