//! # External Commands
//!
//! Every side effect that leaves the process (git, the package manager, tool
//! probes) goes through the [`CommandRunner`] trait. The runner returns a
//! structured [`CommandOutput`] and leaves the success decision to the caller;
//! [`run_checked`] is the common "fail on non-zero exit" policy.
//!
//! [`SystemRunner`] is the real implementation. Package-manager commands are
//! stored as command lines (`"npm install"`) and run through the platform
//! shell, while git is invoked directly with an argument vector.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// A single external command to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name, or the whole command line when `shell` is set
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    /// Interpret `program` with `sh -c` (or `cmd /C` on Windows)
    pub shell: bool,
}

impl Invocation {
    /// A direct program invocation with an argument vector.
    pub fn new<I, S>(program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
            shell: false,
        }
    }

    /// A command line interpreted by the platform shell.
    pub fn shell(command_line: &str, cwd: &Path) -> Self {
        Self {
            program: command_line.to_string(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
            shell: true,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status and captured output of a finished command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
    /// stdout followed by stderr
    pub combined: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Capability to run external commands to completion.
///
/// `Err` means the command could not be started; a command that ran and
/// failed is an `Ok` with a non-zero code.
pub trait CommandRunner: Sync {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput>;
}

/// Runs commands on the host system, blocking until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        debug!(
            "Running `{}` in {}",
            invocation,
            invocation.cwd.display()
        );

        let mut command = if invocation.shell {
            shell_command(&invocation.program)
        } else {
            let mut command = Command::new(&invocation.program);
            command.args(&invocation.args);
            command
        };

        let output = command
            .current_dir(&invocation.cwd)
            .output()
            .map_err(|e| Error::Spawn {
                command: invocation.to_string(),
                message: e.to_string(),
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            code: output.status.code(),
            combined,
        })
    }
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", command_line]);
    command
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.args(["-c", command_line]);
    command
}

/// Run a command and turn a non-zero exit into [`Error::CommandFailed`].
pub fn run_checked(runner: &dyn CommandRunner, invocation: &Invocation) -> Result<CommandOutput> {
    let output = runner.run(invocation)?;
    if output.success() {
        Ok(output)
    } else {
        Err(Error::CommandFailed {
            command: invocation.to_string(),
            code: output.code,
            output: output.combined,
        })
    }
}
