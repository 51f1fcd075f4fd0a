//! # Output Configuration
//!
//! This module provides utilities for controlling CLI output appearance,
//! including color and emoji support based on terminal capabilities and
//! user preferences, and the [`Reporter`] the scaffolding steps print
//! progress through.
//!
//! ## Respecting User Preferences
//!
//! The module respects the following environment variables and flags:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rbxts_scaffold::output::{OutputConfig, Reporter};
//!
//! let reporter = Reporter::new(OutputConfig::from_env_and_flag("auto"));
//! let output = reporter.spin("Installing dependencies", || install())?;
//! ```

use std::env;
use std::path::Path;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::package_manager::PackageManager;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// # Arguments
    /// * `color_flag` - The value of the --color CLI flag: "always", "never", or "auto"
    ///
    /// In auto mode, colors are disabled if `NO_COLOR` is set, `CLICOLOR=0`,
    /// `TERM=dumb`, or stdout is not a TTY (unless `CLICOLOR_FORCE=1`).
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, the plain text otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// Prints the progress of a scaffolding run.
///
/// A silent reporter prints nothing and never draws spinners.
#[derive(Debug, Clone)]
pub struct Reporter {
    config: OutputConfig,
    silent: bool,
}

impl Reporter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            silent: false,
        }
    }

    pub fn silent() -> Self {
        Self {
            config: OutputConfig { use_color: false },
            silent: true,
        }
    }

    /// A finished step.
    pub fn step(&self, message: &str) {
        if self.silent {
            return;
        }
        println!("{} {}", style(emoji(&self.config, "✔", "[OK]")).green(), message);
    }

    /// A non-fatal problem the user should know about.
    pub fn warn(&self, message: &str) {
        if self.silent {
            return;
        }
        eprintln!(
            "{} {}",
            style(emoji(&self.config, "⚠", "[WARN]")).yellow(),
            message
        );
    }

    /// Run `task` behind a spinner, then report it as a finished step.
    ///
    /// The spinner is cleared whether or not the task succeeds.
    pub fn spin<T, E>(&self, message: &str, task: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        if self.silent {
            return task();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
        {
            spinner.set_style(spinner_style);
        }
        spinner.set_message(format!("{}...", message));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = task();
        spinner.finish_and_clear();

        if result.is_ok() {
            self.step(message);
        }
        result
    }

    /// Final message with the commands to run next.
    pub fn finished(&self, dir: &Path, cwd: &Path, manager: PackageManager, built: bool) {
        if self.silent {
            return;
        }

        println!();
        println!(
            "{} {}",
            emoji(&self.config, "🎉", "[DONE]"),
            style("Project created successfully!").green().bold()
        );
        println!();
        println!("{}", style("Next steps:").bold());

        let shown = crate::path::display_relative(cwd, dir);
        if shown != "." {
            println!("  {} {}", style("$").dim(), style(format!("cd {}", shown)).cyan());
        }
        if !built {
            println!(
                "  {} {}",
                style("$").dim(),
                style(manager.commands().build).cyan()
            );
        }
        println!(
            "  {} {}",
            style("$").dim(),
            style(format!("{} run watch", manager.executable())).cyan()
        );
    }
}
