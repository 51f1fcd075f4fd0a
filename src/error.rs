//! # Error Handling
//!
//! This module defines the centralized error type for `rbxts-scaffold`. It
//! uses the `thiserror` library to describe every failure the `init` flow can
//! surface, each with enough context for the user to act on it.
//!
//! The variants map onto the failure classes of a scaffolding run:
//!
//! - **Environment**: a required tool is missing (`ToolMissing`).
//! - **Validation**: an option value is malformed (`InvalidOption`).
//! - **Conflict**: the destination already holds files the template would
//!   write (`Conflicts`).
//! - **Subprocess**: git or the package manager exited unsuccessfully
//!   (`CommandFailed`, `RepositoryClone`).
//! - **Template / descriptor**: the template tree or one of the generated JSON
//!   files is unusable (`Template`, `Manifest`).
//!
//! A malformed auxiliary-repositories file is absent from this
//! list: it is recovered locally and never becomes an `Error`.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for rbxts-scaffold operations
#[derive(Error, Debug)]
pub enum Error {
    /// A tool the run cannot proceed without is not installed.
    #[error("{tool} is not installed{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ToolMissing {
        tool: String,
        /// Install instructions for the missing tool
        hint: Option<String>,
    },

    /// An option value failed validation.
    #[error("Invalid value for {option}: {message}")]
    InvalidOption { option: String, message: String },

    /// The destination already contains paths the template would create.
    ///
    /// Paths are relative to the directory the command was invoked from.
    #[error("{}", format_conflicts(paths))]
    Conflicts { paths: Vec<String> },

    /// An external command exited unsuccessfully.
    #[error("Command failed: {command} (exit code {}){}", code.map(|c| c.to_string()).unwrap_or_else(|| "none".to_string()), format_output(output))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        /// Captured stdout followed by stderr
        output: String,
    },

    /// An external command could not be started at all.
    #[error("Failed to run {command}: {message}")]
    Spawn { command: String, message: String },

    /// Cloning one of the auxiliary repositories failed.
    #[error("Failed to clone {name}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    RepositoryClone {
        name: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// The selected template is missing or unreadable.
    #[error("Template error: {message}")]
    Template { message: String },

    /// A generated JSON file could not be patched.
    #[error("Failed to patch {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    /// The user aborted an interactive prompt.
    #[error("Prompt cancelled")]
    Cancelled,

    /// An interactive prompt failed, typically because no terminal is attached.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A directory walk error, wrapped from `walkdir::Error`.
    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

fn format_conflicts(paths: &[String]) -> String {
    let mut message = format!(
        "Destination is not empty: {} path(s) would be overwritten:",
        paths.len()
    );
    for path in paths {
        message.push_str("\n  - ");
        message.push_str(path);
    }
    message.push_str("\n  hint: Choose an empty directory with --dir, or remove these paths first");
    message
}

fn format_output(output: &str) -> String {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n{}", trimmed)
    }
}
