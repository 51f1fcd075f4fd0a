//! Default values for rbxts-scaffold.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::{Path, PathBuf};

/// npm scope prepended to generated package names.
pub const PACKAGE_SCOPE: &str = "@rbxts";

/// GitHub owner that generated `repository` URLs point at.
pub const REPOSITORY_OWNER: &str = "rbxts-ecs";

/// Name of the auxiliary repositories file inside the templates root.
pub const REPOSITORIES_FILE: &str = "repositories.json";

/// Rules every generated `.gitignore` must contain.
pub const REQUIRED_GITIGNORE_RULES: [&str; 4] =
    ["/node_modules", "/out", "/include", "*.tsbuildinfo"];

/// Returns the default templates root directory.
///
/// Checked in order, the first existing directory wins:
/// - `templates/` next to the executable (release archives)
/// - the platform data directory, e.g. `~/.local/share/rbxts-scaffold/templates`
/// - `templates/` in the source checkout the binary was built from
///
/// This can be overridden by the `--templates` CLI flag or the
/// `RBXTS_SCAFFOLD_TEMPLATES` environment variable.
pub fn default_templates_root() -> PathBuf {
    let beside_executable = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")));
    let data_dir = dirs::data_dir().map(|dir| dir.join("rbxts-scaffold").join("templates"));
    let source_checkout = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");

    beside_executable
        .into_iter()
        .chain(data_dir)
        .find(|dir| dir.is_dir())
        .unwrap_or(source_checkout)
}

/// Returns the default auxiliary repositories file for a templates root.
pub fn default_repositories_file(templates_root: &Path) -> PathBuf {
    templates_root.join(REPOSITORIES_FILE)
}
