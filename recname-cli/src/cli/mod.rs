pub mod args;
pub mod types;

pub use args::{Cli, Commands, WalkArgs};
pub use types::{InvalidDateArg, OutputFormat};
