use quotebar_core::{FetchError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Format is: {program} <ticker>{{,<ticker>}}")]
    Usage { program: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error fetching market data...\n{0}")]
    Market(FetchError),

    #[error("Error fetching quotes...\n{0}")]
    Quotes(FetchError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Every failure exits with 1; shell scripts only distinguish success.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. }
            | Self::Validation(_)
            | Self::Market(_)
            | Self::Quotes(_)
            | Self::Serialization(_)
            | Self::Io(_) => 1,
        }
    }
}
