use nu_ansi_term::Color as AnsiColor;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// One file that was (or, in a dry run, would be) renamed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedFile {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Result of a rename pass over a directory tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameResult {
    pub root: PathBuf,
    pub dry_run: bool,
    pub renamed: Vec<RenamedFile>,
    /// Files without a GMT token
    pub skipped: usize,
    /// Files whose GMT token held an impossible date (skip policy only)
    pub invalid: Vec<PathBuf>,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

/// Single human-readable line for one rename.
pub fn format_rename_line(file: &RenamedFile, dry_run: bool, use_color: bool) -> String {
    let verb = if dry_run { "Would rename" } else { "Renamed" };

    if use_color {
        format!(
            "{}: {} {} {}",
            verb,
            file.from.display(),
            AnsiColor::White.paint("->"),
            AnsiColor::Green.paint(file.to.display().to_string())
        )
    } else {
        format!("{}: {} -> {}", verb, file.from.display(), file.to.display())
    }
}

impl OutputFormatter for RenameResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": if self.dry_run { "plan" } else { "rename" },
            "root": self.root,
            "renamed": self.renamed,
            "skipped": self.skipped,
            "invalid": self.invalid,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        for file in &self.renamed {
            writeln!(output, "{}", format_rename_line(file, self.dry_run, false)).unwrap();
        }
        output
    }
}

impl OutputFormatter for VersionResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
