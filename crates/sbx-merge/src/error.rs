//! Error types for the merge crate.

use sbx_types::EntityId;

/// Errors building a merge set.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// A merge needs at least one source.
    #[error("merge requires at least one source")]
    NoSources,

    /// The target cannot absorb itself.
    #[error("source {0} is the merge target")]
    SourceIsTarget(EntityId),

    /// The same source was listed twice.
    #[error("source {0} is listed more than once")]
    DuplicateSource(EntityId),
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
