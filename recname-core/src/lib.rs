#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod config;
pub mod error;
pub mod operations;
pub mod output;
pub mod planner;
pub mod timestamp;
pub mod walker;

pub use apply::apply_rename;
pub use config::{Config, InvalidDatePolicy};
pub use error::ExtractError;
pub use operations::{rename_operation, RenameOptions};
pub use output::{
    format_rename_line, OutputFormat, OutputFormatter, RenameResult, RenamedFile, VersionResult,
};
pub use planner::{base_name, extension_of, plan, CollisionRegistry, RenamePlan, SourceEntry};
pub use timestamp::{extract, ParsedTimestamp};
pub use walker::{resolve_root, walk, walk_iter};
