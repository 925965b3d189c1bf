//! File System Types
//!
//! Core types and the backend capability trait shared by the in-memory tree
//! and the real filesystem.

use async_trait::async_trait;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("no such file or directory: {path}")]
    NotFound { path: String },

    #[error("not a directory: {path}")]
    NotDirectory { path: String },

    #[error("is a directory: {path}")]
    IsDirectory { path: String },

    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("{path}: {message}")]
    Io { path: String, message: String },
}

impl FsError {
    /// Wrap an I/O failure, keeping the underlying message.
    pub fn io(path: &str, err: std::io::Error) -> Self {
        FsError::Io {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}

/// Which execution target a backend drives.
///
/// Both backends share one verb vocabulary; the few places where their
/// user-facing behavior differs are policies on this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// The real operating system filesystem.
    Os,
    /// The in-memory tree.
    Virtual,
}

impl BackendKind {
    /// Line count reported by `wc`. The tree backend counts the last,
    /// unterminated line; the OS backend counts newlines only.
    pub fn line_count(self, content: &[u8]) -> usize {
        let newlines = content.iter().filter(|&&byte| byte == b'\n').count();
        match self {
            BackendKind::Os => newlines,
            BackendKind::Virtual => newlines + 1,
        }
    }

    /// Prefix one diagnostic line for a failed verb.
    pub fn diagnostic(self, verb: &str, message: &str) -> String {
        match self {
            BackendKind::Os => format!("{}: {}\n", verb, message),
            BackendKind::Virtual => format!("Error: {}\n", message),
        }
    }
}

/// Directory entry with type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirentEntry {
    pub name: String,
    pub is_directory: bool,
}

/// Capability interface the interpreter dispatches against.
///
/// Implemented once for the real filesystem and once for the in-memory tree.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Which backend this is
    fn kind(&self) -> BackendKind;

    /// Resolve a path to its absolute display form
    async fn resolve_path(&self, path: &str) -> Result<String, FsError>;

    /// Children of a directory (empty path means the current directory)
    async fn list_children(&self, path: &str) -> Result<Vec<DirentEntry>, FsError>;

    /// Move the current directory; `None` when `cd` is given no argument
    async fn change_cursor(&self, path: Option<&str>) -> Result<(), FsError>;

    /// Read a whole file as raw bytes
    async fn read_file(&self, path: &str) -> Result<Vec<u8>, FsError>;

    /// Create an empty file, truncating an existing one
    async fn write_empty_file(&self, name: &str) -> Result<(), FsError>;

    /// Who is running the session
    fn owner(&self) -> String;
}
