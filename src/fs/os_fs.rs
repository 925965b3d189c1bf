//! Real File System Backend
//!
//! Forwards every operation to the operating system. The working directory is
//! only reached through the [`WorkingDirectory`] capability, so the backend
//! never touches process-wide state directly.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use super::types::*;

/// Get/set access to a working directory.
pub trait WorkingDirectory: Send + Sync {
    fn get(&self) -> io::Result<PathBuf>;
    fn set(&self, path: &Path) -> io::Result<()>;
}

/// The process-wide working directory.
pub struct ProcessWorkingDir;

impl WorkingDirectory for ProcessWorkingDir {
    fn get(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn set(&self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }
}

/// A working directory owned by one backend instead of the process.
pub struct DetachedWorkingDir {
    dir: Mutex<PathBuf>,
}

impl DetachedWorkingDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: Mutex::new(dir.into()) }
    }
}

impl WorkingDirectory for DetachedWorkingDir {
    fn get(&self) -> io::Result<PathBuf> {
        let dir = self.dir.lock().unwrap_or_else(|e| e.into_inner());
        Ok(dir.clone())
    }

    fn set(&self, path: &Path) -> io::Result<()> {
        let mut dir = self.dir.lock().unwrap_or_else(|e| e.into_inner());
        let target = dir.join(path);
        if !std::fs::metadata(&target)?.is_dir() {
            return Err(io::Error::other("not a directory"));
        }
        *dir = target.canonicalize()?;
        Ok(())
    }
}

/// Backend over the real filesystem.
pub struct OsFs {
    cwd: Box<dyn WorkingDirectory>,
}

impl OsFs {
    /// Backend bound to the process working directory.
    pub fn new() -> Self {
        Self::with_working_dir(Box::new(ProcessWorkingDir))
    }

    pub fn with_working_dir(cwd: Box<dyn WorkingDirectory>) -> Self {
        Self { cwd }
    }

    fn absolute(&self, path: &str) -> Result<PathBuf, FsError> {
        let base = self.cwd.get().map_err(|e| FsError::io(".", e))?;
        if path.is_empty() {
            Ok(base)
        } else {
            Ok(base.join(path))
        }
    }
}

impl Default for OsFs {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileSystem for OsFs {
    fn kind(&self) -> BackendKind {
        BackendKind::Os
    }

    async fn resolve_path(&self, path: &str) -> Result<String, FsError> {
        let target = self.absolute(path)?;
        let resolved = tokio::fs::canonicalize(&target)
            .await
            .map_err(|e| FsError::io(path, e))?;
        Ok(resolved.display().to_string())
    }

    async fn list_children(&self, path: &str) -> Result<Vec<DirentEntry>, FsError> {
        let target = self.absolute(path)?;
        let mut dir = tokio::fs::read_dir(&target)
            .await
            .map_err(|e| FsError::io(path, e))?;

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(|e| FsError::io(path, e))? {
            let is_directory = entry
                .file_type()
                .await
                .map(|t| t.is_dir())
                .unwrap_or(false);
            entries.push(DirentEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                is_directory,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn change_cursor(&self, path: Option<&str>) -> Result<(), FsError> {
        let Some(path) = path else {
            return Err(FsError::InvalidArgument {
                message: "No args".to_string(),
            });
        };
        let target = self.absolute(path)?;
        debug!("Changing working directory to {}", target.display());
        self.cwd.set(&target).map_err(|e| FsError::io(path, e))
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>, FsError> {
        let target = self.absolute(path)?;
        tokio::fs::read(&target)
            .await
            .map_err(|e| FsError::io(path, e))
    }

    async fn write_empty_file(&self, name: &str) -> Result<(), FsError> {
        if name.is_empty() {
            return Err(FsError::InvalidArgument {
                message: "filename cannot be empty".to_string(),
            });
        }
        let target = self.absolute(name)?;
        tokio::fs::File::create(&target)
            .await
            .map_err(|e| FsError::io(name, e))?;
        Ok(())
    }

    fn owner(&self) -> String {
        std::env::var("USER")
            .ok()
            .filter(|user| !user.is_empty())
            .or_else(|| std::env::var("USERNAME").ok().filter(|user| !user.is_empty()))
            .unwrap_or_else(|| "unknown".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, OsFs) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("a.txt"), "one two\nthree\n").unwrap();
        let root = dir.path().canonicalize().unwrap();
        let fs = OsFs::with_working_dir(Box::new(DetachedWorkingDir::new(root)));
        (dir, fs)
    }

    #[tokio::test]
    async fn test_list_children_sorted_with_kinds() {
        let (_dir, fs) = fixture();
        let entries = fs.list_children("").await.unwrap();
        assert_eq!(entries, vec![
            DirentEntry { name: "a.txt".to_string(), is_directory: false },
            DirentEntry { name: "sub".to_string(), is_directory: true },
        ]);
    }

    #[tokio::test]
    async fn test_change_cursor() {
        let (dir, fs) = fixture();
        fs.change_cursor(Some("sub")).await.unwrap();
        let expected = dir.path().join("sub").canonicalize().unwrap();
        assert_eq!(fs.resolve_path("").await.unwrap(), expected.display().to_string());
    }

    #[tokio::test]
    async fn test_change_cursor_without_args_fails() {
        let (_dir, fs) = fixture();
        let err = fs.change_cursor(None).await.unwrap_err();
        assert_eq!(err.to_string(), "No args");
    }

    #[tokio::test]
    async fn test_change_cursor_into_file_fails() {
        let (dir, fs) = fixture();
        assert!(fs.change_cursor(Some("a.txt")).await.is_err());
        let expected = dir.path().canonicalize().unwrap();
        assert_eq!(fs.resolve_path("").await.unwrap(), expected.display().to_string());
    }

    #[tokio::test]
    async fn test_read_file() {
        let (_dir, fs) = fixture();
        assert_eq!(fs.read_file("a.txt").await.unwrap(), b"one two\nthree\n");
        assert!(matches!(fs.read_file("missing").await, Err(FsError::Io { .. })));
    }

    #[tokio::test]
    async fn test_read_file_keeps_non_utf8_bytes() {
        let (dir, fs) = fixture();
        std::fs::write(dir.path().join("bin.dat"), [0xff, 0xfe, b'\n']).unwrap();
        assert_eq!(fs.read_file("bin.dat").await.unwrap(), vec![0xff, 0xfe, b'\n']);
    }

    #[tokio::test]
    async fn test_write_empty_file_truncates() {
        let (dir, fs) = fixture();
        fs.write_empty_file("a.txt").await.unwrap();
        assert_eq!(std::fs::read_to_string(dir.path().join("a.txt")).unwrap(), "");
        fs.write_empty_file("new.md").await.unwrap();
        assert!(dir.path().join("new.md").exists());
    }

    #[tokio::test]
    async fn test_write_empty_file_rejects_empty_name() {
        let (_dir, fs) = fixture();
        assert!(matches!(
            fs.write_empty_file("").await,
            Err(FsError::InvalidArgument { .. })
        ));
    }
}
