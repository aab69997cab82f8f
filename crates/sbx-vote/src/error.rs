use sbx_types::VoteStatus;

/// Errors raised by the vote engine.
#[derive(Debug, thiserror::Error)]
pub enum VoteError {
    /// Predictions only apply to edits still open for voting.
    #[error("edit is {0}, not pending")]
    NotPending(VoteStatus),

    /// A pending edit without an expiration cannot be predicted.
    #[error("pending edit has no expiration")]
    MissingExpiration,

    /// Configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for vote results.
pub type VoteResult<T> = Result<T, VoteError>;
