use crate::planner::SourceEntry;
use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve `root` to an absolute directory so its own base name is usable as
/// a label (e.g. when invoked with `.`).
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve root directory: {}", root.display()))?;

    if !resolved.is_dir() {
        return Err(anyhow!("Root is not a directory: {}", resolved.display()));
    }

    Ok(resolved)
}

fn directory_label(dir: &Path) -> Option<String> {
    dir.file_name()?.to_str().map(ToString::to_string)
}

/// Iterate over every regular file below `root`, in a stable order.
///
/// Directories are descended into but never yielded. Within a directory,
/// entries are visited by file name so repeated runs see the same
/// "first" file for each collision group. Entries that cannot be read are
/// logged and skipped so the rest of the tree is still visited.
pub fn walk_iter(root: &Path) -> impl Iterator<Item = SourceEntry> + '_ {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().unwrap_or(root).display().to_string();
                    tracing::warn!(path = %path, "skipping unreadable entry: {e}");
                    return None;
                },
            };

            if !entry.file_type().is_file() {
                return None;
            }

            let path = entry.path();
            let Some(label) = path.parent().and_then(directory_label) else {
                tracing::debug!(path = %path.display(), "skipping file with no usable parent name");
                return None;
            };

            let source = SourceEntry::from_path(path, &label);
            if source.is_none() {
                tracing::debug!(path = %path.display(), "skipping non-UTF-8 file name");
            }
            source
        })
}

/// Collect all readable entries below `root`.
pub fn walk(root: &Path) -> Vec<SourceEntry> {
    walk_iter(root).collect()
}
