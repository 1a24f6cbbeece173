// Cursor navigation

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use log::debug;
use crate::explorer::error::NavError;
use crate::explorer::path::{normalize, resolve};

/// The shell's current directory: absolute, normalized, and a directory
/// when it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(PathBuf);

impl Cursor {
    /// Opens a cursor at `path`, which may be relative to the process working directory.
    pub fn open(path: &Path) -> Result<Self, NavError> {
        let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let norm = normalize(&abs);
        require_dir(&norm)?;
        Ok(Cursor(norm))
    }

    #[cfg(test)]
    pub(crate) fn unchecked(path: PathBuf) -> Self {
        Cursor(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// True when `path` is the cursor itself or one of its ancestors.
    pub fn is_within(&self, path: &Path) -> bool {
        self.0.starts_with(path)
    }
}

impl AsRef<Path> for Cursor {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

fn require_dir(path: &Path) -> Result<(), NavError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(NavError::NotADirectory(path.to_path_buf())),
        Err(e) => Err(match e.kind() {
            io::ErrorKind::NotFound => NavError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => NavError::PermissionDenied(path.to_path_buf()),
            _ => NavError::Io { path: path.to_path_buf(), source: e },
        }),
    }
}

/// Resolves `raw` against `cursor` and returns the cursor for it.
/// The caller decides whether to adopt it.
pub fn descend(raw: &str, cursor: &Cursor) -> Result<Cursor, NavError> {
    let target = resolve(raw, cursor);
    require_dir(&target)?;
    debug!("descend: {} -> {}", cursor, target);
    Ok(Cursor(target.into_path_buf()))
}

/// Parent of `cursor`. Roots (`/`, `C:\`) have none.
pub fn ascend(cursor: &Cursor) -> Result<Cursor, NavError> {
    let parent = cursor.0.parent().ok_or(NavError::AtRoot)?;
    debug!("ascend: {} -> {}", cursor, parent.display());
    Ok(Cursor(parent.to_path_buf()))
}
