mod cli;
mod commands;
mod config;
mod demo;
mod format;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{ShowArgs, cmd_config, cmd_readings, cmd_show};
use crate::config::{Config, resolve_format};
use crate::format::FormatOptions;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Logs go to stderr so stdout only carries command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load();
    let output = cli.output.as_ref();
    let no_color = cli.no_color || config.no_color || output.is_some();

    match cli.command {
        Commands::Show {
            store,
            output: output_args,
            live,
        } => {
            let format = resolve_format(output_args.format, &config);
            let opts = FormatOptions::new(no_color).with_compact(output_args.compact);
            let args = ShowArgs {
                store: &store,
                format,
                output,
                live,
                quiet: cli.quiet,
            };
            cmd_show(args, &config, &opts).await?;
        }
        Commands::Readings {
            store,
            output: output_args,
            metric,
        } => {
            let format = resolve_format(output_args.format, &config);
            let opts = FormatOptions::new(no_color).with_compact(output_args.compact);
            cmd_readings(&store, metric, format, output, &config, &opts).await?;
        }
        Commands::Config { action } => {
            cmd_config(action, output)?;
        }
    }

    Ok(())
}
