//! # Tool Availability Probe
//!
//! Detects which package managers are installed and makes sure git is. Each
//! tool is probed by running `<tool> --version` through the shell; the probes
//! run in parallel and every one of them is collected before the result is
//! returned, so one broken probe never hides the others.
//!
//! A probe that cannot be executed at all is interpreted differently per tool:
//! package managers are assumed present (the install step will report a real
//! problem later), git is assumed missing and stops the run.

use std::path::Path;

use log::{debug, warn};
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::package_manager::PackageManager;
use crate::process::{CommandRunner, Invocation};
use crate::suggestions;

/// Installed package managers, in [`PackageManager::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolAvailability {
    pub package_managers: Vec<PackageManager>,
}

impl ToolAvailability {
    pub fn is_installed(&self, manager: PackageManager) -> bool {
        self.package_managers.contains(&manager)
    }
}

enum Tool {
    Git,
    Manager(PackageManager),
}

impl Tool {
    fn executable(&self) -> &'static str {
        match self {
            Tool::Git => "git",
            Tool::Manager(manager) => manager.executable(),
        }
    }
}

/// Probe git and every known package manager.
///
/// Fails with [`Error::ToolMissing`] when git is not available.
pub fn probe_tools(runner: &dyn CommandRunner, cwd: &Path) -> Result<ToolAvailability> {
    let mut tools = vec![Tool::Git];
    tools.extend(PackageManager::ALL.into_iter().map(Tool::Manager));

    let results: Vec<(Tool, Result<bool>)> = tools
        .into_par_iter()
        .map(|tool| {
            let probe = Invocation::shell(&format!("{} --version", tool.executable()), cwd);
            let result = runner.run(&probe).map(|output| output.success());
            (tool, result)
        })
        .collect();

    let mut git_available = false;
    let mut package_managers = Vec::new();

    for (tool, result) in results {
        let available = match (&tool, result) {
            (_, Ok(found)) => found,
            (Tool::Git, Err(e)) => {
                warn!("Could not probe for git: {}", e);
                false
            }
            (Tool::Manager(_), Err(e)) => {
                warn!(
                    "Could not probe for {}, assuming it is installed: {}",
                    tool.executable(),
                    e
                );
                true
            }
        };
        debug!("{} available: {}", tool.executable(), available);

        match tool {
            Tool::Git => git_available = available,
            Tool::Manager(manager) if available => package_managers.push(manager),
            Tool::Manager(_) => {}
        }
    }

    if !git_available {
        return Err(Error::ToolMissing {
            tool: "git".to_string(),
            hint: Some(suggestions::install_git()),
        });
    }

    Ok(ToolAvailability { package_managers })
}
