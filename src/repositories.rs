//! # Auxiliary Repositories
//!
//! Templates can ask for extra git repositories to be cloned into the new
//! project (shared assets, vendored libraries). They are declared in an
//! optional JSON file:
//!
//! ```json
//! {
//!   "repositories": [
//!     {
//!       "name": "shared-assets",
//!       "https": "https://github.com/org/assets.git",
//!       "ssh": "git@github.com:org/assets.git",
//!       "destination": "vendor/assets",
//!       "templates": ["game"]
//!     }
//!   ]
//! }
//! ```
//!
//! The file is best-effort: a missing or malformed file means "no auxiliary
//! repositories" and the run continues.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::git;
use crate::options::GitProtocol;
use crate::process::CommandRunner;
use crate::suggestions;
use crate::template::TemplateMode;

/// Contents of the auxiliary repositories file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoriesConfig {
    pub repositories: Vec<AuxiliaryRepository>,
}

/// One repository to clone into the generated project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuxiliaryRepository {
    pub name: String,
    pub https: String,
    pub ssh: String,
    /// Path relative to the project directory
    pub destination: PathBuf,
    /// Template names this repository applies to; empty means all of them.
    /// Names no template uses are kept and never match.
    #[serde(default)]
    pub templates: Vec<String>,
}

impl AuxiliaryRepository {
    pub fn applies_to(&self, mode: TemplateMode) -> bool {
        if self.templates.is_empty() {
            return true;
        }
        match mode.dir_name() {
            Some(name) => self.templates.iter().any(|template| template == name),
            None => false,
        }
    }

    pub fn url(&self, protocol: GitProtocol) -> &str {
        match protocol {
            GitProtocol::Https => &self.https,
            GitProtocol::Ssh => &self.ssh,
        }
    }
}

impl RepositoriesConfig {
    /// Repositories applicable to `mode`, in declaration order.
    pub fn for_template(&self, mode: TemplateMode) -> impl Iterator<Item = &AuxiliaryRepository> {
        self.repositories
            .iter()
            .filter(move |repository| repository.applies_to(mode))
    }
}

/// Load the repositories file.
///
/// Returns `None` when the file does not exist or cannot be parsed.
pub fn load_repositories(path: &Path) -> Option<RepositoriesConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("No repositories file at {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("Ignoring malformed repositories file {}: {}", path.display(), e);
            None
        }
    }
}

/// Clone every repository applicable to `mode` into `dir`.
///
/// Stops at the first failure. Returns the names of the cloned repositories.
pub fn clone_repositories(
    runner: &dyn CommandRunner,
    config: &RepositoriesConfig,
    mode: TemplateMode,
    protocol: GitProtocol,
    dir: &Path,
) -> Result<Vec<String>> {
    let mut cloned = Vec::new();
    for repository in config.for_template(mode) {
        let url = repository.url(protocol);
        debug!("Cloning {} from {}", repository.name, url);

        git::clone_shallow(runner, url, &repository.destination, dir).map_err(|e| {
            let output = match &e {
                Error::CommandFailed { output, .. } => output.clone(),
                other => other.to_string(),
            };
            Error::RepositoryClone {
                name: repository.name.clone(),
                message: e.to_string(),
                hint: Some(suggestions::repository_clone_failed(protocol, &output)),
            }
        })?;
        cloned.push(repository.name.clone());
    }
    Ok(cloned)
}
