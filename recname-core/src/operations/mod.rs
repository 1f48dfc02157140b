//! High-level operations that correspond to CLI commands
//!
//! These modules hold the business logic for each recname operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod rename;

pub use rename::{rename_operation, RenameOptions};
