use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A file discovered under the root, described by what the planner needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub original_path: PathBuf,
    /// Base name of the immediate parent directory
    pub directory_label: String,
    pub file_name: String,
    /// Including the leading dot (".mp4"), or empty
    pub file_extension: String,
}

impl SourceEntry {
    /// Build an entry for `path`, deriving name and extension from it.
    ///
    /// Returns `None` when the path has no UTF-8 file name.
    pub fn from_path(path: &Path, directory_label: &str) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        let file_extension = extension_of(&file_name);

        Some(Self {
            original_path: path.to_path_buf(),
            directory_label: directory_label.to_string(),
            file_name,
            file_extension,
        })
    }
}

/// Text after the final `.` of `file_name`, with the dot, or "" when there is
/// none. A lone leading dot (".hidden") does not start an extension.
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

/// A single rename decided by the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub original_path: PathBuf,
    pub new_file_name: String,
}

impl RenamePlan {
    /// Destination path: same directory as the original, new file name.
    pub fn new_path(&self) -> PathBuf {
        self.original_path.with_file_name(&self.new_file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CollisionKey {
    date: String,
    directory_label: String,
    file_extension: String,
}

/// Per-run count of how often each (date, label, extension) was assigned.
///
/// Create one per traversal and drop it afterwards. It never looks at the
/// filesystem, so results depend only on the order entries are planned in.
#[derive(Debug, Default, Clone)]
pub struct CollisionRegistry {
    counts: HashMap<CollisionKey, usize>,
}

impl CollisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the count for a triple and return the new (1-based) occurrence.
    fn record(&mut self, date: &str, directory_label: &str, file_extension: &str) -> usize {
        let key = CollisionKey {
            date: date.to_string(),
            directory_label: directory_label.to_string(),
            file_extension: file_extension.to_string(),
        };
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    #[cfg(test)]
    fn count(&self, date: &str, directory_label: &str, file_extension: &str) -> usize {
        let key = CollisionKey {
            date: date.to_string(),
            directory_label: directory_label.to_string(),
            file_extension: file_extension.to_string(),
        };
        self.counts.get(&key).copied().unwrap_or(0)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.counts.len()
    }
}

/// `"{date} - {label}"`, the name before any part suffix or extension.
pub fn base_name(date_string: &str, directory_label: &str) -> String {
    format!("{date_string} - {directory_label}")
}

/// Decide the new file name for `entry`.
///
/// The first entry seen for a given (date, label, extension) gets the bare
/// base name; later ones get `" - part N"` where N is the occurrence count.
pub fn plan(
    entry: &SourceEntry,
    date_string: &str,
    registry: &mut CollisionRegistry,
) -> RenamePlan {
    let base = base_name(date_string, &entry.directory_label);
    let occurrence = registry.record(date_string, &entry.directory_label, &entry.file_extension);

    let new_file_name = if occurrence > 1 {
        format!("{base} - part {occurrence}{}", entry.file_extension)
    } else {
        format!("{base}{}", entry.file_extension)
    };

    RenamePlan {
        original_path: entry.original_path.clone(),
        new_file_name,
    }
}
