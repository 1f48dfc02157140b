use thiserror::Error;

/// Why a filename did not yield a capture date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No `GMT########-######` token anywhere in the name.
    #[error("no GMT timestamp token found")]
    NotFound,

    /// A token was found but its `YYYYMMDD` group is not a calendar date.
    #[error("invalid date '{token}' in GMT timestamp")]
    InvalidDate { token: String },
}

