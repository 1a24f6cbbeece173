use std::fmt;
use std::ops::Deref;
use std::path::{Component, Path, PathBuf};
use crate::explorer::nav::Cursor;

/// An absolute, normalized path resolved against a cursor.
/// Says nothing about whether the path exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRef(PathBuf);

impl PathRef {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl Deref for PathRef {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for PathRef {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for PathRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Resolves user input against the cursor. Purely lexical, never fails.
/// Callers reject empty input before getting here.
pub fn resolve(raw: &str, cursor: &Cursor) -> PathRef {
    let p = Path::new(raw);
    let joined = if p.is_absolute() {
        p.to_path_buf()
    } else {
        cursor.as_path().join(p)
    };
    PathRef(normalize(&joined))
}

/// Collapses `.` and `..` segments without touching the filesystem.
/// `..` at a root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => out.push(comp.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
