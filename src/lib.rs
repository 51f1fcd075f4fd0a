//! # rbxts-scaffold Library
//!
//! This library creates new roblox-ts projects from a template directory. It
//! backs the `rbxts-scaffold` command-line tool, but every step is exposed so
//! it can be driven programmatically or tested without a terminal.
//!
//! ## Quick Example
//!
//! ```
//! use rbxts_scaffold::options::CompilerVersion;
//! use rbxts_scaffold::package_manager::PackageManager;
//!
//! let version = CompilerVersion::parse("3.0.0").unwrap();
//! assert_eq!(
//!     PackageManager::Pnpm.dev_install_command(&version.package_spec()),
//!     "pnpm add --save-dev roblox-ts@3.0.0"
//! );
//! assert!(CompilerVersion::parse("3.0").is_err());
//! ```
//!
//! ## Core Concepts
//!
//! - **Options (`options`, `prompt`)**: the command-line request is completed
//!   by interactive questions and resolved into immutable `InitOptions`.
//! - **Templates (`template`, `conflict`)**: a template is a directory tree
//!   copied verbatim into the destination once no file would be overwritten.
//! - **Patching (`manifest`, `git`)**: `package.json`, `default.project.json`
//!   and `.gitignore` are rewritten for the new project.
//! - **External tools (`process`, `probe`, `package_manager`,
//!   `repositories`)**: git and the package manager run behind the
//!   `CommandRunner` trait.
//!
//! ## Execution Flow
//!
//! [`orchestrator::run`] executes the whole flow:
//!
//! 1.  **Probe**: find installed package managers; git is required.
//! 2.  **Prompt**: ask for whatever the command line left open.
//! 3.  **Conflict check**: stop if the destination already holds template paths.
//! 4.  **Materialize**: copy the template and patch `package.json`.
//! 5.  **Git**: `git init` and complete `.gitignore`.
//! 6.  **Install**: install dependencies, optionally pinning the compiler.
//! 7.  **Descriptor**: patch `default.project.json`.
//! 8.  **Repositories**: clone auxiliary repositories for the template.
//! 9.  **Build**: run the build script unless skipped.

pub mod conflict;
pub mod defaults;
pub mod error;
pub mod git;
pub mod manifest;
pub mod options;
pub mod orchestrator;
pub mod output;
pub mod package_manager;
pub mod path;
pub mod probe;
pub mod process;
pub mod prompt;
pub mod repositories;
pub mod suggestions;
pub mod template;

#[cfg(test)]
mod proptests;
