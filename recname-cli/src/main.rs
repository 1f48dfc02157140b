use anyhow::{Context, Result};
use clap::Parser;
use recname_core::{Config, ExtractError, OutputFormatter, VersionResult};
use std::io::{self, IsTerminal};
use std::process;

mod cli;
mod logging;
mod rename;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
            .unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                process::exit(2);
            });
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load .recname/config.toml: {e:#}");
            process::exit(2);
        },
    };

    let use_color = !cli.no_color
        && config
            .defaults
            .use_color
            .unwrap_or_else(|| io::stdout().is_terminal());

    logging::init_logger(!cli.no_color && io::stderr().is_terminal());

    let result = match cli.command {
        Commands::Rename { walk, dry_run } => {
            rename::handle_rename(walk, dry_run, &config, use_color)
        },
        Commands::Plan { walk } => rename::handle_rename(walk, true, &config, use_color),
        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

/// 2 for bad input (missing root, impossible date), 3 for anything else.
fn exit_code(err: &anyhow::Error) -> i32 {
    let invalid_input = err
        .chain()
        .any(|cause| cause.downcast_ref::<ExtractError>().is_some())
        || err.to_string().contains("Failed to resolve root directory")
        || err.to_string().contains("Root is not a directory");

    if invalid_input {
        2
    } else {
        3
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "recname".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    println!("{}", version_result.format(output.into()));
    Ok(())
}
