//! # Templates
//!
//! A template is a directory tree of starter files under the templates root,
//! one subdirectory per [`TemplateMode`]. Materializing a template copies the
//! tree verbatim into the destination; the generated files are patched
//! afterwards by [`crate::manifest`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Which template a run materializes.
///
/// `Unspecified` only exists before prompting; resolved options always carry
/// `Game` or `Package`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateMode {
    #[default]
    Unspecified,
    Game,
    Package,
}

impl TemplateMode {
    /// Selectable templates, in prompt order.
    pub const CHOICES: [TemplateMode; 2] = [TemplateMode::Game, TemplateMode::Package];

    /// Name of the template's directory under the templates root.
    pub fn dir_name(self) -> Option<&'static str> {
        match self {
            TemplateMode::Unspecified => None,
            TemplateMode::Game => Some("game"),
            TemplateMode::Package => Some("package"),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TemplateMode::Unspecified => "No template selected",
            TemplateMode::Game => "Generate a Roblox place",
            TemplateMode::Package => "Generate a roblox-ts npm package",
        }
    }
}

impl fmt::Display for TemplateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name().unwrap_or("unspecified"))
    }
}

/// Locate the directory of `mode` under `root`.
pub fn template_dir(root: &Path, mode: TemplateMode) -> Result<PathBuf> {
    let name = mode.dir_name().ok_or_else(|| Error::Template {
        message: "no template selected".to_string(),
    })?;

    let dir = root.join(name);
    if !dir.is_dir() {
        return Err(Error::Template {
            message: format!("template directory not found: {}", dir.display()),
        });
    }
    Ok(dir)
}

/// Names of the entries directly inside the template directory, sorted.
pub fn top_level_entries(template_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(template_dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Copy the template tree into `dest`, creating `dest` if needed.
///
/// Relative structure and file permissions are preserved. A failure part way
/// through leaves the files copied so far in place.
pub fn materialize(template_dir: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for entry in WalkDir::new(template_dir).min_depth(1).follow_links(false) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(template_dir)
            .map_err(|e| Error::Template {
                message: format!("{}: {}", entry.path().display(), e),
            })?;
        let target = dest.join(relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
            copied += 1;
        } else {
            // fs::copy carries the permission bits over
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    debug!(
        "Copied {} file(s) from {} to {}",
        copied,
        template_dir.display(),
        dest.display()
    );
    Ok(copied)
}

#[cfg(unix)]
fn copy_symlink(source: &Path, target: &Path) -> Result<()> {
    let link = fs::read_link(source)?;
    std::os::unix::fs::symlink(link, target)?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(source: &Path, target: &Path) -> Result<()> {
    fs::copy(source, target)?;
    Ok(())
}
