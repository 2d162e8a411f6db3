//! CLI for the bundle request URL option parser.

mod commands;

use anyhow::Result;
use bundle_url_core::config;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use commands::{run_completions, run_config, run_man, run_parse};

/// Top-level CLI for bundle-url.
#[derive(Debug, Parser)]
#[command(name = "bundle-url")]
#[command(about = "Decode bundler dev-server request URLs into bundle options", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a bundle, bytecode bundle or source map request URL and print its options as JSON.
    Parse {
        /// Request URL, absolute (`http://host/index.bundle?...`) or a bare path.
        url: String,
        /// Recognized platform name (repeatable). Replaces the configured platforms.
        #[arg(long = "platform", value_name = "NAME")]
        platforms: Vec<String>,
        /// Print JSON on a single line.
        #[arg(long)]
        compact: bool,
    },

    /// Show the config file path and the effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Render the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Parse {
                url,
                platforms,
                compact,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_parse(&cfg, &url, platforms, compact)?;
            }
            CliCommand::Config => {
                let cfg = config::load_or_init()?;
                run_config(&config::config_path()?, &cfg)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
