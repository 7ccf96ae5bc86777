//! Command-line interface for stagecheck
//!
//! Provides the main CLI structure and command dispatch. Argument parsing
//! uses clap's derive API; each command lives in its own module under
//! `commands`.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// Stagecheck - pre-commit checks for staged files
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Install the pre-commit hook into the current repository
    Install {
        /// Overwrite an existing hook that stagecheck does not manage
        #[arg(long)]
        force: bool,
    },
    /// Remove the stagecheck-managed pre-commit hook
    Uninstall,
    /// Execute a specific hook (used by the installed hook script)
    Run {
        /// Hook name to run
        hook: String,

        /// Additional arguments passed through by git
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },
    /// Show the command plan for the current staging area without executing
    Plan,
    /// Show repository, hook, and tool status
    Status,
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged configuration
    Show,
    /// Validate the configuration against the planner's schema
    Validate,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::Install { force }) => {
                commands::install::execute(force, &output).await
            }
            Some(Commands::Uninstall) => commands::uninstall::execute(&output).await,
            Some(Commands::Run { hook, args }) => {
                commands::run::execute(&hook, &args, config_path, &output).await
            }
            Some(Commands::Plan) => commands::plan::execute(config_path, &output).await,
            Some(Commands::Status) => commands::status::execute(config_path, &output).await,
            Some(Commands::Config(cmd)) => {
                commands::config::execute(cmd, config_path, &output).await
            }
            Some(Commands::Version) => commands::version::execute(&output).await,
            None => {
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,globset=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,globset=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
