use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of cursor navigation.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("'{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("already at the root directory")]
    AtRoot,

    #[error("permission denied: '{}'", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O failure on '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures of filesystem operations. Every variant names the path involved.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("'{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("permission denied: '{}'", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{reason}: '{}'", .path.display())]
    InvalidTarget { path: PathBuf, reason: &'static str },

    #[error("I/O failure on '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Wraps an `io::Error` raised while touching `path`.
    pub fn io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io { path: path.to_path_buf(), source },
        }
    }

    pub fn invalid(path: &Path, reason: &'static str) -> Self {
        FsError::InvalidTarget { path: path.to_path_buf(), reason }
    }
}

/// Extension to attach a path to `io::Result`s, in the spirit of `anyhow::Context`.
pub trait IoPathExt<T> {
    fn at(self, path: &Path) -> Result<T, FsError>;
}

impl<T> IoPathExt<T> for io::Result<T> {
    fn at(self, path: &Path) -> Result<T, FsError> {
        self.map_err(|e| FsError::io(path, e))
    }
}
