//! # Init Options
//!
//! [`InitRequest`] is what the command line supplied: every field the user
//! may leave out is an `Option`. [`InitOptions`] is the fully resolved,
//! immutable configuration the scaffolding steps run against, produced by
//! [`crate::prompt::resolve`] after the interactive questions were answered.

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

use clap::ValueEnum;
use regex::Regex;

use crate::error::{Error, Result};
use crate::package_manager::PackageManager;
use crate::template::TemplateMode;

/// Which URL variant of an auxiliary repository to clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GitProtocol {
    #[default]
    Https,
    Ssh,
}

impl GitProtocol {
    pub const ALL: [GitProtocol; 2] = [GitProtocol::Https, GitProtocol::Ssh];
}

impl fmt::Display for GitProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitProtocol::Https => f.write_str("HTTPS"),
            GitProtocol::Ssh => f.write_str("SSH"),
        }
    }
}

/// A compiler version of the form `MAJOR.MINOR.PATCH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerVersion(String);

impl CompilerVersion {
    pub fn parse(input: &str) -> Result<Self> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN.get_or_init(|| {
            Regex::new(r"^\d+\.\d+\.\d+$").expect("version pattern is valid")
        });

        if pattern.is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(Error::InvalidOption {
                option: "--compilerVersion".to_string(),
                message: format!("'{input}' must be in the format X.Y.Z (e.g. 3.0.0)"),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Package spec handed to the package manager, e.g. `roblox-ts@3.0.0`.
    pub fn package_spec(&self) -> String {
        format!("roblox-ts@{}", self.0)
    }
}

/// `clap` value parser for `--compilerVersion`.
pub fn parse_compiler_version(input: &str) -> std::result::Result<CompilerVersion, String> {
    CompilerVersion::parse(input).map_err(|e| match e {
        Error::InvalidOption { message, .. } => message,
        other => other.to_string(),
    })
}

/// Options as supplied on the command line, before prompting.
#[derive(Debug, Clone)]
pub struct InitRequest {
    pub mode: TemplateMode,
    pub dir: Option<PathBuf>,
    pub compiler_version: Option<CompilerVersion>,
    pub yes: bool,
    pub package_manager: Option<PackageManager>,
    pub skip_build: bool,
    pub git_protocol: Option<GitProtocol>,
    /// Directory containing one subdirectory per template
    pub templates_root: PathBuf,
    /// Auxiliary repositories declaration; may not exist
    pub repositories_file: PathBuf,
    /// Directory the command was invoked from
    pub cwd: PathBuf,
}

/// Fully resolved options for one scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    /// Never [`TemplateMode::Unspecified`]
    pub mode: TemplateMode,
    /// Absolute, lexically normalized destination
    pub dir: PathBuf,
    pub compiler_version: Option<CompilerVersion>,
    pub yes: bool,
    pub package_manager: PackageManager,
    pub skip_build: bool,
    pub git_protocol: GitProtocol,
}
