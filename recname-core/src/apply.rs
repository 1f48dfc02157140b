use crate::planner::RenamePlan;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::PathBuf;

/// Carry out one planned rename within its directory.
///
/// Refuses to replace an existing file at the destination; such a file is
/// usually left over from an earlier run and would otherwise be lost.
/// Returns the destination path.
pub fn apply_rename(plan: &RenamePlan) -> Result<PathBuf> {
    let from = &plan.original_path;
    let to = plan.new_path();

    if *from == to {
        return Ok(to);
    }

    if to.symlink_metadata().is_ok() {
        return Err(anyhow!(
            "Destination already exists, refusing to overwrite: {} -> {}",
            from.display(),
            to.display()
        ));
    }

    fs::rename(from, &to)
        .with_context(|| format!("Failed to rename {} to {}", from.display(), to.display()))?;

    tracing::info!(from = %from.display(), to = %to.display(), "renamed");

    Ok(to)
}
