//! Shared test utilities for E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_fake_tools();
//!     fixture.command().args(["game", "--yes"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::templates_root;
    pub use super::TestFixture;
}

/// Templates shipped in this repository.
pub fn templates_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// A temporary working directory, optionally with stand-in `git` and `npm`
/// executables that log their arguments instead of doing anything.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new().with_fake_tools();
/// fixture.command().args(["package", "-y", "--dir", "lib"]).assert().success();
/// assert!(fixture.tool_log().contains("npm install"));
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    fake_tools: bool,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
            fake_tools: false,
        }
    }

    /// Put logging `git` and `npm` scripts first on `PATH`.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn with_fake_tools(mut self) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.temp_dir.child(".bin");
        bin.create_dir_all().expect("Failed to create bin directory");
        for tool in ["git", "npm"] {
            let script = bin.child(tool);
            script
                .write_str(&format!(
                    "#!/bin/sh\necho \"{} $*\" >> \"$SCAFFOLD_TOOL_LOG\"\n",
                    tool
                ))
                .expect("Failed to write fake tool");
            std::fs::set_permissions(script.path(), std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make fake tool executable");
        }
        self.fake_tools = true;
        self
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Commands the fake tools were invoked with, one per line.
    #[allow(dead_code)]
    pub fn tool_log(&self) -> String {
        std::fs::read_to_string(self.path().join(".tools.log")).unwrap_or_default()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Create a command running in this fixture's directory against the
    /// repository templates, with colors off and no repositories file.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rbxts-scaffold");
        cmd.current_dir(self.path())
            .env("RBXTS_SCAFFOLD_TEMPLATES", templates_root())
            .env(
                "RBXTS_SCAFFOLD_REPOSITORIES",
                self.path().join("no-repositories.json"),
            )
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");

        if self.fake_tools {
            let system_path = std::env::var_os("PATH").unwrap_or_default();
            let mut paths = vec![self.path().join(".bin")];
            paths.extend(std::env::split_paths(&system_path));
            cmd.env(
                "PATH",
                std::env::join_paths(paths).expect("Failed to build PATH"),
            )
            .env("SCAFFOLD_TOOL_LOG", self.path().join(".tools.log"));
        }
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_file() {
        let fixture = TestFixture::new().with_file("test.txt", "hello");
        assert!(fixture.path().join("test.txt").exists());
    }

    #[test]
    fn test_templates_root_exists() {
        assert!(templates_root().join("game").is_dir());
    }
}
