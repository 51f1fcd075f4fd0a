//! # Conflict Detection
//!
//! Before anything is written, every path the run would create or overwrite
//! is checked. If any of them is already taken the run stops with the full
//! list, so a populated directory is never partially overwritten.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::package_manager::PackageManager;
use crate::path::display_relative;

/// Files checked regardless of what the template contains.
pub fn always_checked(manager: PackageManager) -> [&'static str; 4] {
    ["package.json", manager.lockfile(), "tsconfig.json", ".gitignore"]
}

/// Collect the paths under `dest` that would be overwritten.
///
/// `candidates` are names relative to `dest`; duplicates are checked once.
/// Returned paths are rendered relative to `cwd`, in candidate order. If
/// `dest` or one of its ancestors is not a directory, that path is the only
/// conflict.
pub fn find_conflicts<S: AsRef<str>>(
    dest: &Path,
    candidates: &[S],
    cwd: &Path,
) -> Result<Vec<String>> {
    if let Some(blocker) = non_directory_ancestor(dest)? {
        debug!("Destination blocked by {}", blocker.display());
        return Ok(vec![display_relative(cwd, blocker)]);
    }

    let mut seen: Vec<&str> = Vec::new();
    let mut conflicts = Vec::new();

    for candidate in candidates {
        let name = candidate.as_ref();
        if seen.contains(&name) {
            continue;
        }
        seen.push(name);

        let path = dest.join(name);
        if is_conflict(&path)? {
            debug!("Conflict: {}", path.display());
            conflicts.push(display_relative(cwd, &path));
        }
    }

    Ok(conflicts)
}

/// Fail with [`Error::Conflicts`] if any candidate path is taken.
pub fn ensure_no_conflicts<S: AsRef<str>>(
    dest: &Path,
    candidates: &[S],
    cwd: &Path,
) -> Result<()> {
    let paths = find_conflicts(dest, candidates, cwd)?;
    if paths.is_empty() {
        Ok(())
    } else {
        Err(Error::Conflicts { paths })
    }
}

/// The nearest existing path among `dest` and its ancestors, if it is not a
/// directory.
fn non_directory_ancestor(dest: &Path) -> Result<Option<&Path>> {
    for path in dest.ancestors() {
        if path.as_os_str().is_empty() {
            break;
        }
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => return Ok(None),
            Ok(_) => return Ok(Some(path)),
            Err(e) if matches!(
                e.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
            {
                continue
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(None)
}

/// Symlinks and files always conflict; directories only when non-empty.
fn is_conflict(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    let file_type = metadata.file_type();
    if file_type.is_dir() {
        Ok(fs::read_dir(path)?.next().is_some())
    } else {
        Ok(file_type.is_file() || file_type.is_symlink())
    }
}
