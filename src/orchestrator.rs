//! # Init Orchestrator
//!
//! Drives one scaffolding run from the raw command-line request to a built
//! project. The steps run strictly in order:
//!
//! ```text
//! probe tools -> load repositories file -> prompt -> check conflicts
//!   -> copy template -> patch package.json -> git init -> install
//!   -> patch default.project.json -> clone repositories -> build
//! ```
//!
//! Any failure stops the run. Nothing is written before the conflict check
//! passes; after that, files written by earlier steps are left in place.
//! External commands and prompts are injected so the whole flow can run
//! against a [`RecordingRunner`](crate::process) and a scripted prompter.

use log::{debug, info};

use crate::conflict::{always_checked, ensure_no_conflicts};
use crate::error::{Error, Result};
use crate::git;
use crate::manifest::{patch_manifest, patch_project_descriptor, PackageNodeRename};
use crate::options::{InitOptions, InitRequest};
use crate::output::Reporter;
use crate::path::project_name;
use crate::probe::probe_tools;
use crate::process::{run_checked, CommandRunner, Invocation};
use crate::prompt::{build_questions, resolve, Prompter};
use crate::repositories::{clone_repositories, load_repositories};
use crate::template::{materialize, template_dir, top_level_entries};

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub options: InitOptions,
    /// Scoped name written to `package.json`
    pub package_name: String,
    pub files_copied: usize,
    pub gitignore_rules_added: Vec<&'static str>,
    /// `None` when the template has no project descriptor
    pub descriptor: Option<PackageNodeRename>,
    pub cloned_repositories: Vec<String>,
    pub built: bool,
}

/// Run the whole `init` flow.
pub fn run(
    request: &InitRequest,
    runner: &dyn CommandRunner,
    prompter: &mut dyn Prompter,
    reporter: &Reporter,
) -> Result<InitReport> {
    let tools = probe_tools(runner, &request.cwd)?;
    let repositories = load_repositories(&request.repositories_file);

    let questions = build_questions(request, &tools, repositories.is_some());
    let answers = if questions.is_empty() {
        Default::default()
    } else {
        prompter.ask(&questions)?.ok_or(Error::Cancelled)?
    };
    let options = resolve(request, &tools, &answers)?;
    debug!("Resolved options: {:?}", options);

    let dir = &options.dir;
    let name = project_name(dir).ok_or_else(|| Error::InvalidOption {
        option: "--dir".to_string(),
        message: format!("cannot derive a project name from {}", dir.display()),
    })?;

    let template = template_dir(&request.templates_root, options.mode)?;
    let mut candidates = top_level_entries(&template)?;
    candidates.extend(
        always_checked(options.package_manager)
            .iter()
            .map(|path| path.to_string()),
    );
    ensure_no_conflicts(dir, &candidates, &request.cwd)?;

    let files_copied = materialize(&template, dir)?;
    reporter.step(&format!("Copied the {} template", options.mode));
    info!("Copied {} file(s) into {}", files_copied, dir.display());

    let package_name = patch_manifest(dir, &name)?;
    reporter.step(&format!("Named the package {}", package_name));

    let gitignore_rules_added = git::init_repository(runner, dir)?;
    reporter.step("Initialized a git repository");

    let manager = options.package_manager;
    reporter.spin(&format!("Installed dependencies with {}", manager), || {
        run_checked(runner, &Invocation::shell(manager.commands().init, dir))?;
        if let Some(version) = &options.compiler_version {
            let command = manager.dev_install_command(&version.package_spec());
            run_checked(runner, &Invocation::shell(&command, dir))?;
        }
        Ok::<_, Error>(())
    })?;

    let descriptor = patch_project_descriptor(dir, &package_name, options.mode)?;
    if let Some(PackageNodeRename::Ambiguous { candidates }) = &descriptor {
        reporter.warn(&format!(
            "Several package entries in the project descriptor ({}); none was renamed",
            candidates.join(", ")
        ));
    }

    let mut cloned_repositories = Vec::new();
    if let Some(config) = &repositories {
        if config.for_template(options.mode).next().is_some() {
            cloned_repositories = reporter.spin("Cloned additional repositories", || {
                clone_repositories(runner, config, options.mode, options.git_protocol, dir)
            })?;
        }
    }

    let built = !options.skip_build;
    if built {
        reporter.spin("Built the project", || {
            run_checked(runner, &Invocation::shell(manager.commands().build, dir))
        })?;
    } else {
        debug!("Skipping build");
    }

    reporter.finished(dir, &request.cwd, manager, built);

    Ok(InitReport {
        options,
        package_name,
        files_copied,
        gitignore_rules_added,
        descriptor,
        cloned_repositories,
        built,
    })
}
