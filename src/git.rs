use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::defaults::REQUIRED_GITIGNORE_RULES;
use crate::error::Result;
use crate::process::{run_checked, CommandRunner, Invocation};

pub const GITIGNORE_FILE: &str = ".gitignore";

/// Initialize a repository in `dir` and make sure `.gitignore` carries the
/// required rules.
///
/// Returns the rules that were appended.
pub fn init_repository(runner: &dyn CommandRunner, dir: &Path) -> Result<Vec<&'static str>> {
    run_checked(runner, &Invocation::new("git", ["init"], dir))?;
    ensure_gitignore_rules(dir)
}

/// Append every required rule missing from `<dir>/.gitignore`.
///
/// A rule counts as present if it occurs anywhere in the file, so re-running
/// never duplicates a rule. A missing file is treated as empty.
pub fn ensure_gitignore_rules(dir: &Path) -> Result<Vec<&'static str>> {
    let path = dir.join(GITIGNORE_FILE);
    let existing = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let missing: Vec<&'static str> = REQUIRED_GITIGNORE_RULES
        .into_iter()
        .filter(|rule| !existing.contains(*rule))
        .collect();

    if missing.is_empty() {
        debug!("{} already has every required rule", path.display());
        return Ok(missing);
    }

    let mut content = existing;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for rule in &missing {
        content.push_str(rule);
        content.push('\n');
    }
    fs::write(&path, content)?;

    debug!("Added {} rule(s) to {}", missing.len(), path.display());
    Ok(missing)
}

/// Clone `url` into `dest` (relative to `cwd`) keeping only the latest commit.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Any authentication configured in ~/.gitconfig
pub fn clone_shallow(
    runner: &dyn CommandRunner,
    url: &str,
    dest: &Path,
    cwd: &Path,
) -> Result<()> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = cwd.join(dest).parent() {
        fs::create_dir_all(parent)?;
    }

    let dest = dest.to_string_lossy();
    run_checked(
        runner,
        &Invocation::new("git", ["clone", "--depth", "1", url, dest.as_ref()], cwd),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::process::testing::RecordingRunner;
    use tempfile::TempDir;

    #[test]
    fn test_gitignore_created_when_missing() {
        let temp = TempDir::new().unwrap();
        let added = ensure_gitignore_rules(temp.path()).unwrap();
        assert_eq!(added, REQUIRED_GITIGNORE_RULES.to_vec());
        assert_eq!(
            fs::read_to_string(temp.path().join(GITIGNORE_FILE)).unwrap(),
            "/node_modules\n/out\n/include\n*.tsbuildinfo\n"
        );
    }

    #[test]
    fn test_gitignore_existing_rule_not_duplicated() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(GITIGNORE_FILE), "/out").unwrap();

        let added = ensure_gitignore_rules(temp.path()).unwrap();
        assert_eq!(added, vec!["/node_modules", "/include", "*.tsbuildinfo"]);

        let content = fs::read_to_string(temp.path().join(GITIGNORE_FILE)).unwrap();
        assert_eq!(content.matches("/out").count(), 1);
        assert_eq!(content, "/out\n/node_modules\n/include\n*.tsbuildinfo\n");
    }

    #[test]
    fn test_gitignore_is_idempotent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(GITIGNORE_FILE), "# editor\n.vscode\n").unwrap();

        ensure_gitignore_rules(temp.path()).unwrap();
        let first = fs::read_to_string(temp.path().join(GITIGNORE_FILE)).unwrap();

        let added = ensure_gitignore_rules(temp.path()).unwrap();
        let second = fs::read_to_string(temp.path().join(GITIGNORE_FILE)).unwrap();

        assert!(added.is_empty());
        assert_eq!(first, second);
        assert!(first.starts_with("# editor\n.vscode\n"));
    }

    #[test]
    fn test_init_repository_runs_git_init() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();

        init_repository(&runner, temp.path()).unwrap();

        assert_eq!(runner.commands(), vec!["git init"]);
        let invocations = runner.invocations.lock().unwrap();
        assert_eq!(invocations[0].cwd, temp.path());
        assert!(!invocations[0].shell);
    }

    #[test]
    fn test_init_repository_failure_skips_gitignore() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new().respond("git init", 128, "fatal: cannot mkdir");

        let err = init_repository(&runner, temp.path()).unwrap_err();
        assert!(matches!(err, Error::CommandFailed { .. }));
        assert!(!temp.path().join(GITIGNORE_FILE).exists());
    }

    #[test]
    fn test_clone_shallow_creates_parent() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();

        clone_shallow(
            &runner,
            "https://github.com/example/assets.git",
            Path::new("vendor/shared/assets"),
            temp.path(),
        )
        .unwrap();

        assert!(temp.path().join("vendor/shared").is_dir());
        assert_eq!(
            runner.commands(),
            vec!["git clone --depth 1 https://github.com/example/assets.git vendor/shared/assets"]
        );
    }
}
