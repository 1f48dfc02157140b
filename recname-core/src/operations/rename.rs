use crate::apply::apply_rename;
use crate::config::InvalidDatePolicy;
use crate::error::ExtractError;
use crate::output::{RenameResult, RenamedFile};
use crate::planner::{plan, CollisionRegistry};
use crate::timestamp::extract;
use crate::walker::{resolve_root, walk_iter};
use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    /// Plan every rename but leave the filesystem untouched
    pub dry_run: bool,
    pub on_invalid_date: InvalidDatePolicy,
}

/// Rename every recording below `root` to `"<date> - <directory>"` form.
///
/// Files are handled one at a time: extracted, planned against a registry
/// that lives only for this call, then renamed before the next file is
/// looked at. `on_renamed` sees each rename as soon as it has happened, so a
/// failure part-way through still reports the files already moved.
pub fn rename_operation<F>(
    root: &Path,
    options: &RenameOptions,
    mut on_renamed: F,
) -> Result<RenameResult>
where
    F: FnMut(&RenamedFile),
{
    let root = resolve_root(root)?;
    let mut registry = CollisionRegistry::new();

    let mut result = RenameResult {
        root: root.clone(),
        dry_run: options.dry_run,
        renamed: Vec::new(),
        skipped: 0,
        invalid: Vec::new(),
    };

    for entry in walk_iter(&root) {
        let timestamp = match extract(&entry.file_name) {
            Ok(timestamp) => timestamp,
            Err(ExtractError::NotFound) => {
                tracing::debug!(path = %entry.original_path.display(), "no GMT token, leaving as is");
                result.skipped += 1;
                continue;
            },
            Err(err @ ExtractError::InvalidDate { .. }) => match options.on_invalid_date {
                InvalidDatePolicy::Abort => {
                    return Err(anyhow::Error::new(err)
                        .context(format!("Cannot rename {}", entry.original_path.display())));
                },
                InvalidDatePolicy::Skip => {
                    tracing::warn!(
                        path = %entry.original_path.display(),
                        "{err}, leaving file unrenamed"
                    );
                    result.invalid.push(entry.original_path);
                    continue;
                },
            },
        };

        let rename_plan = plan(&entry, &timestamp.date_string(), &mut registry);

        let to = if options.dry_run {
            rename_plan.new_path()
        } else {
            apply_rename(&rename_plan)?
        };

        let renamed = RenamedFile {
            from: rename_plan.original_path,
            to,
        };
        on_renamed(&renamed);
        result.renamed.push(renamed);
    }

    Ok(result)
}
