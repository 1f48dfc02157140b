use clap::ValueEnum;
use recname_core::InvalidDatePolicy;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for recname_core::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum InvalidDateArg {
    /// Stop the run at the first impossible date
    Abort,
    /// Warn and leave the file unrenamed
    Skip,
}

impl From<InvalidDateArg> for InvalidDatePolicy {
    fn from(arg: InvalidDateArg) -> Self {
        match arg {
            InvalidDateArg::Abort => Self::Abort,
            InvalidDateArg::Skip => Self::Skip,
        }
    }
}
