use anyhow::Result;
use recname_core::{
    format_rename_line, rename_operation, Config, InvalidDatePolicy, OutputFormatter,
    RenameOptions,
};
use std::path::PathBuf;

use crate::cli::{OutputFormat, WalkArgs};

/// Walk the recordings tree and rename (or, with `dry_run`, list) every match.
pub fn handle_rename(
    walk: WalkArgs,
    dry_run: bool,
    config: &Config,
    use_color: bool,
) -> Result<()> {
    let root = walk
        .root
        .or_else(|| config.defaults.root.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let options = RenameOptions {
        dry_run,
        on_invalid_date: walk
            .on_invalid_date
            .map_or(config.defaults.on_invalid_date, InvalidDatePolicy::from),
    };

    match walk.output {
        OutputFormat::Summary => {
            // Print as we go so completed renames are visible even if a later one fails
            rename_operation(&root, &options, |file| {
                println!("{}", format_rename_line(file, dry_run, use_color));
            })?;
        },
        OutputFormat::Json => {
            let result = rename_operation(&root, &options, |_| {})?;
            println!("{}", result.format(walk.output.into()));
        },
    }

    Ok(())
}
