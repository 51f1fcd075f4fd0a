//! Path manipulation utilities for rbxts-scaffold

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` and normalize it lexically.
///
/// `.` components are dropped and `..` pops the previous component. The
/// filesystem is never consulted, so the path does not need to exist.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Render `path` relative to `base` for messages shown to the user.
///
/// Paths outside `base` are rendered in full. Separators are always `/`.
pub fn display_relative(base: &Path, path: &Path) -> String {
    let shown = match path.strip_prefix(base) {
        Ok(relative) if relative.as_os_str().is_empty() => Path::new("."),
        Ok(relative) => relative,
        Err(_) => path,
    };
    shown.to_string_lossy().replace('\\', "/")
}

/// Final component of a directory path, used as the project name.
pub fn project_name(dir: &Path) -> Option<String> {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolutize_relative() {
        assert_eq!(
            absolutize(Path::new("/work"), Path::new("./games/../my-game")),
            PathBuf::from("/work/my-game")
        );
    }

    #[test]
    fn test_absolutize_current_dir() {
        assert_eq!(
            absolutize(Path::new("/work/app"), Path::new(".")),
            PathBuf::from("/work/app")
        );
    }

    #[test]
    fn test_absolutize_absolute_input_ignores_base() {
        assert_eq!(
            absolutize(Path::new("/work"), Path::new("/tmp/x/./y")),
            PathBuf::from("/tmp/x/y")
        );
    }

    #[test]
    fn test_display_relative_inside_base() {
        assert_eq!(
            display_relative(Path::new("/work"), Path::new("/work/app/package.json")),
            "app/package.json"
        );
    }

    #[test]
    fn test_display_relative_base_itself() {
        assert_eq!(display_relative(Path::new("/work"), Path::new("/work")), ".");
    }

    #[test]
    fn test_display_relative_outside_base() {
        assert_eq!(
            display_relative(Path::new("/work"), Path::new("/elsewhere/file")),
            "/elsewhere/file"
        );
    }

    #[test]
    fn test_project_name() {
        assert_eq!(
            project_name(Path::new("/work/my-game")),
            Some("my-game".to_string())
        );
        assert_eq!(project_name(Path::new("/")), None);
    }
}
