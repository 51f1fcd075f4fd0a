//! # Init Command Implementation
//!
//! Scaffolds a new project. This is what runs for `rbxts-scaffold game`,
//! `rbxts-scaffold package`, and for a bare `rbxts-scaffold`, which prompts
//! for the template.
//!
//! All flags are global so they can be written before or after the template
//! subcommand. Their long names follow the camelCase spelling the roblox-ts
//! tooling uses (`--packageManager`, `--skipBuild`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rbxts_scaffold::defaults::{default_repositories_file, default_templates_root};
use rbxts_scaffold::options::{parse_compiler_version, CompilerVersion, GitProtocol, InitRequest};
use rbxts_scaffold::orchestrator;
use rbxts_scaffold::output::{OutputConfig, Reporter};
use rbxts_scaffold::package_manager::PackageManager;
use rbxts_scaffold::process::SystemRunner;
use rbxts_scaffold::prompt::TerminalPrompter;
use rbxts_scaffold::template::TemplateMode;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// roblox-ts compiler version to pin as a dev dependency (X.Y.Z)
    #[arg(
        long = "compilerVersion",
        global = true,
        value_name = "VERSION",
        value_parser = parse_compiler_version
    )]
    pub compiler_version: Option<CompilerVersion>,

    /// Project directory, relative to the current directory
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Accept the default for every question that has one
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Package manager to install dependencies with
    #[arg(long = "packageManager", global = true, value_enum, value_name = "MANAGER")]
    pub package_manager: Option<PackageManager>,

    /// Do not run the build script after installing
    #[arg(long = "skipBuild", global = true)]
    pub skip_build: bool,

    /// Protocol used to clone additional repositories
    #[arg(long = "gitProtocol", global = true, value_enum, value_name = "PROTOCOL")]
    pub git_protocol: Option<GitProtocol>,

    /// Directory holding the game and package templates
    #[arg(long, global = true, value_name = "DIR", env = "RBXTS_SCAFFOLD_TEMPLATES")]
    pub templates: Option<PathBuf>,

    /// Additional repositories file [default: <templates>/repositories.json]
    #[arg(long, global = true, value_name = "FILE", env = "RBXTS_SCAFFOLD_REPOSITORIES")]
    pub repositories: Option<PathBuf>,
}

impl InitArgs {
    fn into_request(self, mode: TemplateMode) -> Result<InitRequest> {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        let templates_root = self.templates.unwrap_or_else(default_templates_root);
        let repositories_file = self
            .repositories
            .unwrap_or_else(|| default_repositories_file(&templates_root));

        Ok(InitRequest {
            mode,
            dir: self.dir,
            compiler_version: self.compiler_version,
            yes: self.yes,
            package_manager: self.package_manager,
            skip_build: self.skip_build,
            git_protocol: self.git_protocol,
            templates_root,
            repositories_file,
            cwd,
        })
    }
}

/// Execute the `init` flow for the selected template.
pub fn execute(args: InitArgs, mode: TemplateMode, output: OutputConfig) -> Result<()> {
    let request = args.into_request(mode)?;
    log::debug!("Templates root: {}", request.templates_root.display());

    let reporter = Reporter::new(output);
    let mut prompter = TerminalPrompter::new();
    orchestrator::run(&request, &SystemRunner, &mut prompter, &reporter)?;
    Ok(())
}
