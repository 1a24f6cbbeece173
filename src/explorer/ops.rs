// Filesystem operations behind the shell commands

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Local};
use log::{debug, info};
use crate::explorer::error::{FsError, IoPathExt};
use crate::explorer::guard::{should_proceed, Decision, DestructiveOp, Outcome};
use crate::explorer::nav::Cursor;
use crate::explorer::walker::{copy_file, copy_tree, delete_tree, CopyOptions, WalkSummary};

pub const DELETE_DIR_PROMPT: &str = "Target is a directory. Delete recursively? (y/n): ";
pub const MOVE_OVERWRITE_PROMPT: &str = "A file with the same name exists. Overwrite? (y/n): ";
pub const COPY_OVERWRITE_PROMPT: &str = "A folder with the same name exists in destination. Overwrite? (y/n): ";

/// Asks the user a question and returns the raw answer.
pub type Confirm<'a> = &'a mut dyn FnMut(&str) -> String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Symlink,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Dir => "Dir",
            EntryKind::File => "File",
            EntryKind::Symlink => "Link",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// Bytes; 0 for directories.
    pub size: u64,
    pub modified: Option<DateTime<Local>>,
}

impl EntryInfo {
    fn new(path: PathBuf, meta: Option<&Metadata>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let kind = match meta.map(|m| m.file_type()) {
            Some(ft) if ft.is_symlink() => EntryKind::Symlink,
            Some(ft) if ft.is_dir() => EntryKind::Dir,
            _ => EntryKind::File,
        };
        let size = match (kind, meta) {
            (EntryKind::Dir, _) | (_, None) => 0,
            (_, Some(m)) => m.len(),
        };
        let modified = meta.and_then(|m| m.modified().ok()).map(DateTime::<Local>::from);
        Self { name, path, kind, size, modified }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub show_hidden: bool,
    pub dirs_first: bool,
    pub pattern: Option<glob::Pattern>,
}

fn stat(path: &Path) -> Result<Metadata, FsError> {
    fs::symlink_metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
        _ => FsError::io(path, e),
    })
}

fn require_dir(path: &Path) -> Result<(), FsError> {
    let meta = fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
        _ => FsError::io(path, e),
    })?;
    if meta.is_dir() { Ok(()) } else { Err(FsError::NotADirectory(path.to_path_buf())) }
}

/// Entries of `dir`, sorted by name. Entries whose metadata cannot be read
/// are still listed, with size 0 and no timestamp.
pub fn list(dir: &Path, options: &ListOptions) -> Result<Vec<EntryInfo>, FsError> {
    require_dir(dir)?;
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).at(dir)? {
        let entry = entry.at(dir)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !options.show_hidden && name.starts_with('.') {
            continue;
        }
        if let Some(pattern) = &options.pattern {
            if !pattern.matches(&name) {
                continue;
            }
        }
        let meta = entry.metadata().ok();
        entries.push(EntryInfo::new(entry.path(), meta.as_ref()));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    if options.dirs_first {
        entries.sort_by_key(|e| !e.is_dir());
    }
    Ok(entries)
}

pub fn info(path: &Path) -> Result<EntryInfo, FsError> {
    let meta = stat(path)?;
    Ok(EntryInfo::new(path.to_path_buf(), Some(&meta)))
}

/// Creates `path` and any missing parents. Existing directories are fine.
pub fn make_dir(path: &Path) -> Result<(), FsError> {
    fs::create_dir_all(path).at(path)?;
    info!("created directory {}", path.display());
    Ok(())
}

/// Deletes a file, or a directory tree after confirmation.
pub fn delete(target: &Path, cursor: &Cursor, confirm: Confirm<'_>) -> Result<Outcome<WalkSummary>, FsError> {
    let meta = stat(target)?;
    if cursor.is_within(target) {
        return Err(FsError::invalid(target, "refusing to delete the current directory or one of its parents"));
    }

    let is_dir = meta.is_dir();
    if should_proceed(DestructiveOp::Delete, true, is_dir, || confirm(DELETE_DIR_PROMPT)) == Decision::Abort {
        info!("delete of {} declined", target.display());
        return Ok(Outcome::Aborted);
    }

    let summary = if is_dir {
        delete_tree(target)?
    } else {
        fs::remove_file(target).at(target)?;
        WalkSummary { directories: 0, files: 1 }
    };
    info!("deleted {} ({} files, {} directories)", target.display(), summary.files, summary.directories);
    Ok(Outcome::Done(summary))
}

fn remove_existing(path: &Path, meta: &Metadata) -> Result<(), FsError> {
    if meta.is_dir() {
        delete_tree(path).map(|_| ())
    } else {
        fs::remove_file(path).at(path)
    }
}

/// `path` with every symbolic link above its last component resolved.
/// Components that do not exist yet are kept as written.
fn locate(path: &Path) -> PathBuf {
    let Some(name) = path.file_name() else {
        return fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    };
    let mut base = path.parent().unwrap_or(Path::new(""));
    let mut missing = Vec::new();
    loop {
        if let Ok(mut real) = fs::canonicalize(base) {
            real.extend(missing.iter().rev());
            real.push(name);
            return real;
        }
        match (base.file_name(), base.parent()) {
            (Some(n), Some(parent)) => {
                missing.push(n.to_os_string());
                base = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}

/// Creates `dest_dir` when missing; rejects it when it is not a directory.
fn prepare_dest_dir(dest_dir: &Path) -> Result<(), FsError> {
    match fs::metadata(dest_dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(FsError::NotADirectory(dest_dir.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("creating destination {}", dest_dir.display());
            fs::create_dir_all(dest_dir).at(dest_dir)
        }
        Err(e) => Err(FsError::io(dest_dir, e)),
    }
}

/// Moves `source` into `dest_dir`, keeping its name. Returns the new path.
pub fn move_entry(
    source: &Path,
    dest_dir: &Path,
    cursor: &Cursor,
    confirm: Confirm<'_>,
) -> Result<Outcome<PathBuf>, FsError> {
    let src_meta = stat(source)?;
    let name = source
        .file_name()
        .ok_or_else(|| FsError::invalid(source, "cannot move a root directory"))?;
    let target = dest_dir.join(name);

    // a link source moves as the link itself, so only links above it are resolved
    let real_source = locate(source);
    let real_target = locate(&target);
    if real_target == real_source {
        return Err(FsError::invalid(source, "source and destination are the same"));
    }
    if src_meta.is_dir() && real_target.starts_with(&real_source) {
        return Err(FsError::invalid(source, "cannot move a directory into itself"));
    }
    if real_source.starts_with(&real_target) {
        return Err(FsError::invalid(source, "cannot replace a directory that contains the source"));
    }
    if cursor.is_within(source) {
        return Err(FsError::invalid(source, "refusing to move the current directory or one of its parents"));
    }

    prepare_dest_dir(dest_dir)?;
    let existing = fs::symlink_metadata(&target).ok();
    let decision = should_proceed(
        DestructiveOp::Overwrite,
        existing.is_some(),
        existing.as_ref().is_some_and(|m| m.is_dir()),
        || confirm(MOVE_OVERWRITE_PROMPT),
    );
    if decision == Decision::Abort {
        info!("move of {} declined", source.display());
        return Ok(Outcome::Aborted);
    }
    if let Some(meta) = &existing {
        if cursor.is_within(&target) {
            return Err(FsError::invalid(&target, "refusing to replace the current directory or one of its parents"));
        }
        remove_existing(&target, meta)?;
    }

    match fs::rename(source, &target) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            debug!("rename across devices, copying {} instead", source.display());
            if src_meta.is_dir() {
                copy_tree(source, &target, CopyOptions::default(), &mut |_| {})?;
                delete_tree(source)?;
            } else {
                copy_file(source, &target, true)?;
                fs::remove_file(source).at(source)?;
            }
        }
        Err(e) => return Err(FsError::io(source, e)),
    }
    info!("moved {} -> {}", source.display(), target.display());
    Ok(Outcome::Done(target))
}

/// Copies the `source` folder to `dest_dir/<name>`, replacing an existing
/// folder of that name after confirmation.
pub fn copy_folder(
    source: &Path,
    dest_dir: &Path,
    cursor: &Cursor,
    confirm: Confirm<'_>,
    options: CopyOptions,
    on_copied: &mut dyn FnMut(&Path),
) -> Result<Outcome<WalkSummary>, FsError> {
    require_dir(source)?;
    let name = source
        .file_name()
        .ok_or_else(|| FsError::invalid(source, "cannot copy a root directory"))?;
    let target = dest_dir.join(name);

    // the walk follows a linked source root, so compare where it really lives
    let real_source = fs::canonicalize(source).at(source)?;
    let real_target = locate(&target);
    if real_target.starts_with(&real_source) || real_source.starts_with(&real_target) {
        return Err(FsError::invalid(source, "cannot copy a folder into itself"));
    }

    prepare_dest_dir(dest_dir)?;
    let existing = fs::symlink_metadata(&target).ok();
    let decision = should_proceed(
        DestructiveOp::Overwrite,
        existing.is_some(),
        existing.as_ref().is_some_and(|m| m.is_dir()),
        || confirm(COPY_OVERWRITE_PROMPT),
    );
    if decision == Decision::Abort {
        info!("copy of {} declined", source.display());
        return Ok(Outcome::Aborted);
    }
    if let Some(meta) = &existing {
        if cursor.is_within(&target) {
            return Err(FsError::invalid(&target, "refusing to replace the current directory or one of its parents"));
        }
        debug!("replacing {}", target.display());
        remove_existing(&target, meta)?;
    }

    let summary = copy_tree(source, &target, options, on_copied)?;
    info!("copied {} -> {} ({} files)", source.display(), target.display(), summary.files);
    Ok(Outcome::Done(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use tempfile::{tempdir, TempDir};

    struct Fixture {
        tmp: TempDir,
        cursor: Cursor,
    }

    impl Fixture {
        fn new() -> Self {
            let tmp = tempdir().unwrap();
            let cursor = Cursor::open(tmp.path()).unwrap();
            Self { tmp, cursor }
        }

        fn path(&self, rel: &str) -> PathBuf {
            self.cursor.as_path().join(rel)
        }

        fn write(&self, rel: &str, content: &str) {
            let p = self.path(rel);
            fs::create_dir_all(p.parent().unwrap()).unwrap();
            fs::write(p, content).unwrap();
        }

        fn snapshot(&self) -> BTreeMap<PathBuf, Option<String>> {
            let mut out = BTreeMap::new();
            fn go(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Option<String>>) {
                for e in fs::read_dir(dir).unwrap() {
                    let p = e.unwrap().path();
                    let rel = p.strip_prefix(root).unwrap().to_path_buf();
                    if p.is_dir() {
                        out.insert(rel, None);
                        go(root, &p, out);
                    } else {
                        out.insert(rel, Some(fs::read_to_string(&p).unwrap()));
                    }
                }
            }
            go(self.tmp.path(), self.tmp.path(), &mut out);
            out
        }
    }

    #[test]
    fn test_delete_file_without_prompt() {
        let fx = Fixture::new();
        fx.write("a.txt", "a");
        let mut asked = 0;
        let out = delete(&fx.path("a.txt"), &fx.cursor, &mut |_| { asked += 1; "n".into() }).unwrap();
        assert_eq!(out, Outcome::Done(WalkSummary { directories: 0, files: 1 }));
        assert_eq!(asked, 0);
        assert!(!fx.path("a.txt").exists());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let fx = Fixture::new();
        let err = delete(&fx.path("ghost"), &fx.cursor, &mut |_| "y".into()).unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn test_delete_directory_declined_changes_nothing() {
        let fx = Fixture::new();
        fx.write("dir/x.txt", "x");
        fx.write("dir/sub/y.txt", "y");
        let before = fx.snapshot();

        let asked = RefCell::new(Vec::new());
        let out = delete(&fx.path("dir"), &fx.cursor, &mut |q| { asked.borrow_mut().push(q.to_string()); "n".into() }).unwrap();
        assert!(out.is_aborted());
        assert_eq!(asked.borrow().as_slice(), [DELETE_DIR_PROMPT]);
        assert_eq!(fx.snapshot(), before);
    }

    #[test]
    fn test_delete_directory_confirmed() {
        let fx = Fixture::new();
        fx.write("dir/x.txt", "x");
        fx.write("dir/sub/y.txt", "y");

        let out = delete(&fx.path("dir"), &fx.cursor, &mut |_| "Y".into()).unwrap();
        assert_eq!(out, Outcome::Done(WalkSummary { directories: 2, files: 2 }));
        assert!(!fx.path("dir").exists());
    }

    #[test]
    fn test_delete_refuses_cursor_ancestors() {
        let fx = Fixture::new();
        let parent = fx.cursor.as_path().parent().unwrap().to_path_buf();
        let err = delete(&parent, &fx.cursor, &mut |_| "y".into()).unwrap_err();
        assert!(matches!(err, FsError::InvalidTarget { .. }));
        let err = delete(fx.cursor.as_path(), &fx.cursor, &mut |_| "y".into()).unwrap_err();
        assert!(matches!(err, FsError::InvalidTarget { .. }));
    }

    #[test]
    fn test_copy_folder_into_new_destination() {
        let fx = Fixture::new();
        fx.write("work/reports/q1.txt", "q1");
        fx.write("work/reports/archive/2020.txt", "old");
        fs::create_dir_all(fx.path("work/reports/empty")).unwrap();

        let mut copied = Vec::new();
        let out = copy_folder(
            &fx.path("work/reports"),
            &fx.path("backup"),
            &fx.cursor,
            &mut |_| panic!("no prompt expected"),
            CopyOptions::default(),
            &mut |p| copied.push(p.to_path_buf()),
        )
        .unwrap();

        assert_eq!(out, Outcome::Done(WalkSummary { directories: 3, files: 2 }));
        assert_eq!(fs::read_to_string(fx.path("backup/reports/q1.txt")).unwrap(), "q1");
        assert_eq!(fs::read_to_string(fx.path("backup/reports/archive/2020.txt")).unwrap(), "old");
        assert!(fx.path("backup/reports/empty").is_dir());
        assert_eq!(copied.len(), 2);
    }

    #[test]
    fn test_copy_folder_declined_leaves_destination() {
        let fx = Fixture::new();
        fx.write("work/reports/q1.txt", "new");
        fx.write("backup/reports/q1.txt", "old");
        fx.write("backup/reports/extra.txt", "extra");
        let before = fx.snapshot();

        let out = copy_folder(
            &fx.path("work/reports"),
            &fx.path("backup"),
            &fx.cursor,
            &mut |q| { assert_eq!(q, COPY_OVERWRITE_PROMPT); "no".into() },
            CopyOptions::default(),
            &mut |_| {},
        )
        .unwrap();

        assert!(out.is_aborted());
        assert_eq!(fx.snapshot(), before);
    }

    #[test]
    fn test_copy_folder_confirmed_replaces_instead_of_merging() {
        let fx = Fixture::new();
        fx.write("work/reports/q1.txt", "new");
        fx.write("backup/reports/q1.txt", "old");
        fx.write("backup/reports/extra.txt", "extra");

        let out = copy_folder(
            &fx.path("work/reports"),
            &fx.path("backup"),
            &fx.cursor,
            &mut |_| "y".into(),
            CopyOptions::default(),
            &mut |_| {},
        )
        .unwrap();

        assert!(!out.is_aborted());
        assert_eq!(fs::read_to_string(fx.path("backup/reports/q1.txt")).unwrap(), "new");
        assert!(!fx.path("backup/reports/extra.txt").exists());
    }

    #[test]
    fn test_copy_folder_rejects_self_overlap() {
        let fx = Fixture::new();
        fx.write("work/reports/q1.txt", "q1");
        let before = fx.snapshot();

        for dest in ["work/reports", "work/reports/inner", "work"] {
            let err = copy_folder(
                &fx.path("work/reports"),
                &fx.path(dest),
                &fx.cursor,
                &mut |_| "y".into(),
                CopyOptions::default(),
                &mut |_| {},
            )
            .unwrap_err();
            assert!(matches!(err, FsError::InvalidTarget { .. }), "dest {dest}");
        }
        assert_eq!(fx.snapshot(), before);
    }

    #[test]
    fn test_copy_folder_source_must_be_directory() {
        let fx = Fixture::new();
        fx.write("plain.txt", "x");
        let err = copy_folder(&fx.path("plain.txt"), &fx.path("out"), &fx.cursor, &mut |_| "y".into(), CopyOptions::default(), &mut |_| {})
            .unwrap_err();
        assert!(matches!(err, FsError::NotADirectory(_)));
        assert!(!fx.path("out").exists());
    }

    #[test]
    fn test_move_creates_destination() {
        let fx = Fixture::new();
        fx.write("a.txt", "a");
        let out = move_entry(&fx.path("a.txt"), &fx.path("new/dir"), &fx.cursor, &mut |_| panic!("no prompt")).unwrap();
        assert_eq!(out, Outcome::Done(fx.path("new/dir/a.txt")));
        assert!(!fx.path("a.txt").exists());
        assert_eq!(fs::read_to_string(fx.path("new/dir/a.txt")).unwrap(), "a");
    }

    #[test]
    fn test_move_overwrite_declined() {
        let fx = Fixture::new();
        fx.write("a.txt", "mine");
        fx.write("dst/a.txt", "theirs");
        let before = fx.snapshot();

        let out = move_entry(&fx.path("a.txt"), &fx.path("dst"), &fx.cursor, &mut |q| { assert_eq!(q, MOVE_OVERWRITE_PROMPT); "".into() }).unwrap();
        assert!(out.is_aborted());
        assert_eq!(fx.snapshot(), before);
    }

    #[test]
    fn test_move_overwrite_confirmed() {
        let fx = Fixture::new();
        fx.write("a.txt", "mine");
        fx.write("dst/a.txt", "theirs");

        let out = move_entry(&fx.path("a.txt"), &fx.path("dst"), &fx.cursor, &mut |_| "y".into()).unwrap();
        assert_eq!(out, Outcome::Done(fx.path("dst/a.txt")));
        assert_eq!(fs::read_to_string(fx.path("dst/a.txt")).unwrap(), "mine");
        assert!(!fx.path("a.txt").exists());
    }

    #[test]
    fn test_move_directory_into_itself_rejected() {
        let fx = Fixture::new();
        fx.write("d/x.txt", "x");
        let err = move_entry(&fx.path("d"), &fx.path("d/inner"), &fx.cursor, &mut |_| "y".into()).unwrap_err();
        assert!(matches!(err, FsError::InvalidTarget { .. }));
        let err = move_entry(&fx.path("d"), fx.cursor.as_path(), &fx.cursor, &mut |_| "y".into()).unwrap_err();
        assert!(matches!(err, FsError::InvalidTarget { .. }));
        assert!(!fx.path("d/inner").exists());
    }

    #[test]
    fn test_move_onto_own_parent_keeps_source() {
        let fx = Fixture::new();
        fx.write("b/b/precious.txt", "precious");
        let before = fx.snapshot();

        let err = move_entry(&fx.path("b/b"), fx.cursor.as_path(), &fx.cursor, &mut |_| "y".into()).unwrap_err();
        assert!(matches!(err, FsError::InvalidTarget { .. }));
        assert_eq!(fx.snapshot(), before);
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_through_link_into_itself_rejected() {
        let fx = Fixture::new();
        fx.write("real/a.txt", "a");
        std::os::unix::fs::symlink(fx.path("real"), fx.path("alias")).unwrap();

        for dest in ["real", "real/new/deeper"] {
            let err = copy_folder(&fx.path("alias"), &fx.path(dest), &fx.cursor, &mut |_| "y".into(), CopyOptions::default(), &mut |_| {})
                .unwrap_err();
            assert!(matches!(err, FsError::InvalidTarget { .. }), "dest {dest}");
        }
        assert!(!fx.path("real/alias").exists());
        assert!(!fx.path("real/new").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_move_through_link_into_itself_rejected() {
        let fx = Fixture::new();
        fx.write("real/sub/a.txt", "a");
        std::os::unix::fs::symlink(fx.path("real"), fx.path("alias")).unwrap();

        let err = move_entry(&fx.path("real"), &fx.path("alias/sub"), &fx.cursor, &mut |_| "y".into()).unwrap_err();
        assert!(matches!(err, FsError::InvalidTarget { .. }));
        assert!(fx.path("real/sub/a.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_reports_permission_failure() {
        use std::os::unix::fs::PermissionsExt;

        let fx = Fixture::new();
        fx.write("dir/locked/stuck.txt", "stuck");
        let locked = fx.path("dir/locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();
        // privileged users ignore directory permissions
        if fs::write(locked.join("write-check"), "").is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = delete(&fx.path("dir"), &fx.cursor, &mut |_| "y".into());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(result, Err(FsError::PermissionDenied(_))), "{result:?}");
        assert!(locked.join("stuck.txt").exists());
    }

    #[test]
    fn test_move_missing_source() {
        let fx = Fixture::new();
        let err = move_entry(&fx.path("ghost"), &fx.path("dst"), &fx.cursor, &mut |_| "y".into()).unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
        assert!(!fx.path("dst").exists());
    }

    #[test]
    fn test_list_reports_metadata() {
        let fx = Fixture::new();
        fx.write("b.txt", "12345");
        fx.write(".hidden", "h");
        fs::create_dir(fx.path("a_dir")).unwrap();

        let entries = list(fx.cursor.as_path(), &ListOptions::default()).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a_dir", "b.txt"]);
        assert_eq!(entries[0].kind, EntryKind::Dir);
        assert_eq!(entries[0].size, 0);
        assert_eq!(entries[1].size, 5);
        assert!(entries[1].modified.is_some());
    }

    #[test]
    fn test_list_options() {
        let fx = Fixture::new();
        fx.write("a.rs", "");
        fx.write("b.txt", "");
        fx.write(".hidden", "");
        fs::create_dir(fx.path("z_dir")).unwrap();

        let opts = ListOptions { show_hidden: true, dirs_first: true, pattern: None };
        let names: Vec<_> = list(fx.cursor.as_path(), &opts).unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["z_dir", ".hidden", "a.rs", "b.txt"]);

        let opts = ListOptions { pattern: Some(glob::Pattern::new("*.rs").unwrap()), ..Default::default() };
        let names: Vec<_> = list(fx.cursor.as_path(), &opts).unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["a.rs"]);
    }

    #[test]
    fn test_info_and_make_dir() {
        let fx = Fixture::new();
        make_dir(&fx.path("x/y/z")).unwrap();
        make_dir(&fx.path("x/y/z")).unwrap();
        let entry = info(&fx.path("x/y")).unwrap();
        assert_eq!(entry.name, "y");
        assert!(entry.is_dir());
        assert!(matches!(info(&fx.path("nope")), Err(FsError::NotFound(_))));
    }
}
