//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};

use rbxts_scaffold::output::OutputConfig;
use rbxts_scaffold::template::TemplateMode;

use crate::commands;

/// Scaffold roblox-ts projects from templates
#[derive(Parser, Debug)]
#[command(name = "rbxts-scaffold")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Template to generate; prompts for one when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    init: commands::init::InitArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a Roblox place
    Game,
    /// Generate a roblox-ts npm package
    Package,
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // RUST_LOG takes precedence over --log-level
        Builder::from_env(Env::default().default_filter_or(&self.log_level))
            .format_timestamp(None)
            .init();

        let output = OutputConfig::from_env_and_flag(&self.color);
        console::set_colors_enabled(output.use_color);
        console::set_colors_enabled_stderr(output.use_color);

        let mode = match self.command {
            Some(Commands::Completions(args)) => return commands::completions::execute(args),
            Some(Commands::Game) => TemplateMode::Game,
            Some(Commands::Package) => TemplateMode::Package,
            None => TemplateMode::Unspecified,
        };
        commands::init::execute(self.init, mode, output)
    }
}
