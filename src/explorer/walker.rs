// Recursive tree walker shared by copy and delete

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use filetime::FileTime;
use log::{debug, warn};
use crate::explorer::error::{FsError, IoPathExt};

/// When a directory is handed to the visitor relative to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Directory first, then its children. Used by copy.
    Pre,
    /// Children first, then the directory. Used by delete.
    Post,
}

/// One node of a walk. `relative` is empty for the root. Whether it is a
/// directory is told by which `Visitor` method receives it.
#[derive(Debug)]
pub struct WalkEntry<'a> {
    pub path: &'a Path,
    pub relative: &'a Path,
    pub is_symlink: bool,
}

/// Per-node actions of a walk. Returning an error stops the walk.
pub trait Visitor {
    fn on_directory(&mut self, entry: &WalkEntry<'_>) -> Result<(), FsError>;
    fn on_file(&mut self, entry: &WalkEntry<'_>) -> Result<(), FsError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
}

/// Walks a directory tree in a fixed order.
///
/// Symbolic links found inside the tree are never followed; they reach the
/// visitor through `on_file`. Siblings are visited in name order. Each
/// directory is read completely, and its handle closed, before any child is
/// visited.
pub struct TreeWalker {
    root: PathBuf,
    order: Order,
}

impl TreeWalker {
    /// Fails unless `root` exists and is a directory.
    pub fn new(root: &Path, order: Order) -> Result<Self, FsError> {
        let meta = fs::metadata(root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FsError::NotFound(root.to_path_buf()),
            _ => FsError::io(root, e),
        })?;
        if !meta.is_dir() {
            return Err(FsError::NotADirectory(root.to_path_buf()));
        }
        Ok(Self { root: root.to_path_buf(), order })
    }

    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<WalkSummary, FsError> {
        let mut summary = WalkSummary::default();
        self.visit_dir(&self.root, Path::new(""), visitor, &mut summary)?;
        Ok(summary)
    }

    fn visit_dir<V: Visitor + ?Sized>(
        &self,
        dir: &Path,
        relative: &Path,
        visitor: &mut V,
        summary: &mut WalkSummary,
    ) -> Result<(), FsError> {
        let entry = WalkEntry { path: dir, relative, is_symlink: false };
        if self.order == Order::Pre {
            visitor.on_directory(&entry)?;
        }

        for child in read_children(dir)? {
            let child_relative = relative.join(&child.name);
            if child.is_dir {
                self.visit_dir(&child.path, &child_relative, visitor, summary)?;
            } else {
                visitor.on_file(&WalkEntry {
                    path: &child.path,
                    relative: &child_relative,
                    is_symlink: child.is_symlink,
                })?;
                summary.files += 1;
            }
        }

        if self.order == Order::Post {
            visitor.on_directory(&entry)?;
        }
        summary.directories += 1;
        Ok(())
    }
}

struct Child {
    path: PathBuf,
    name: OsString,
    is_dir: bool,
    is_symlink: bool,
}

fn read_children(dir: &Path) -> Result<Vec<Child>, FsError> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir).at(dir)? {
        let entry = entry.at(dir)?;
        let path = entry.path();
        // file_type() does not follow links
        let ty = entry.file_type().at(&path)?;
        children.push(Child {
            path,
            name: entry.file_name(),
            is_dir: ty.is_dir(),
            is_symlink: ty.is_symlink(),
        });
    }
    children.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(children)
}

#[derive(Debug, Clone, Copy)]
pub struct CopyOptions {
    pub preserve_timestamps: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self { preserve_timestamps: true }
    }
}

/// Re-roots every visited entry under `dest_root`.
pub struct CopyVisitor<'a> {
    dest_root: PathBuf,
    options: CopyOptions,
    on_copied: &'a mut dyn FnMut(&Path),
}

impl<'a> CopyVisitor<'a> {
    pub fn new(dest_root: &Path, options: CopyOptions, on_copied: &'a mut dyn FnMut(&Path)) -> Self {
        Self { dest_root: dest_root.to_path_buf(), options, on_copied }
    }

    fn target(&self, relative: &Path) -> PathBuf {
        if relative.as_os_str().is_empty() {
            self.dest_root.clone()
        } else {
            self.dest_root.join(relative)
        }
    }
}

impl Visitor for CopyVisitor<'_> {
    fn on_directory(&mut self, entry: &WalkEntry<'_>) -> Result<(), FsError> {
        let target = self.target(entry.relative);
        if !target.is_dir() {
            fs::create_dir_all(&target).at(&target)?;
            debug!("created {}", target.display());
        }
        Ok(())
    }

    fn on_file(&mut self, entry: &WalkEntry<'_>) -> Result<(), FsError> {
        let target = self.target(entry.relative);
        if entry.is_symlink {
            copy_link(entry.path, &target)?;
        } else {
            copy_file(entry.path, &target, self.options.preserve_timestamps)?;
        }
        (self.on_copied)(entry.relative);
        Ok(())
    }
}

/// Copies one regular file, replacing `dst`, optionally carrying over mtime.
pub fn copy_file(src: &Path, dst: &Path, preserve_timestamps: bool) -> Result<(), FsError> {
    fs::copy(src, dst).at(src)?;
    if preserve_timestamps {
        let meta = fs::metadata(src).at(src)?;
        let mtime = FileTime::from_last_modification_time(&meta);
        if let Err(e) = filetime::set_file_mtime(dst, mtime) {
            warn!("could not preserve modification time on {}: {}", dst.display(), e);
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_link(src: &Path, dst: &Path) -> Result<(), FsError> {
    let link_target = fs::read_link(src).at(src)?;
    if fs::symlink_metadata(dst).is_ok() {
        fs::remove_file(dst).at(dst)?;
    }
    std::os::unix::fs::symlink(&link_target, dst).at(dst)
}

#[cfg(not(unix))]
fn copy_link(src: &Path, dst: &Path) -> Result<(), FsError> {
    fs::copy(src, dst).at(src).map(|_| ())
}

/// Removes files, then the directory that held them.
pub struct DeleteVisitor;

impl Visitor for DeleteVisitor {
    fn on_directory(&mut self, entry: &WalkEntry<'_>) -> Result<(), FsError> {
        fs::remove_dir(entry.path).at(entry.path)?;
        debug!("removed directory {}", entry.path.display());
        Ok(())
    }

    fn on_file(&mut self, entry: &WalkEntry<'_>) -> Result<(), FsError> {
        fs::remove_file(entry.path).at(entry.path)
    }
}

/// Pre-order copy of `source` into `dest`. `dest` becomes the mirror of `source`.
pub fn copy_tree(
    source: &Path,
    dest: &Path,
    options: CopyOptions,
    on_copied: &mut dyn FnMut(&Path),
) -> Result<WalkSummary, FsError> {
    let walker = TreeWalker::new(source, Order::Pre)?;
    let summary = walker.walk(&mut CopyVisitor::new(dest, options, on_copied))?;
    debug!("copied {} -> {}: {:?}", source.display(), dest.display(), summary);
    Ok(summary)
}

/// Post-order delete of `root` and everything below it.
/// A link at `root` is refused; remove it as a file instead.
pub fn delete_tree(root: &Path) -> Result<WalkSummary, FsError> {
    if fs::symlink_metadata(root).at(root)?.file_type().is_symlink() {
        return Err(FsError::invalid(root, "refusing to walk through a symbolic link"));
    }
    let walker = TreeWalker::new(root, Order::Post)?;
    let summary = walker.walk(&mut DeleteVisitor)?;
    debug!("deleted {}: {:?}", root.display(), summary);
    Ok(summary)
}
