//! Error types for the diff crate.

use sbx_types::{EditOperation, TargetType};

/// Caller contract violations. Malformed data never produces an error;
/// it degrades to "no change" instead.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// MODIFY and MERGE compare against the current target state.
    #[error("{operation} edit requires the original entity")]
    MissingOriginal { operation: EditOperation },

    /// A CREATE edit has no prior state to compare against.
    #[error("{operation} edit must not carry an original entity")]
    UnexpectedOriginal { operation: EditOperation },

    /// Every operation except DESTROY carries new details.
    #[error("{operation} edit requires a form")]
    MissingForm { operation: EditOperation },

    /// A DESTROY edit carries identity only.
    #[error("{operation} edit must not carry a form")]
    UnexpectedForm { operation: EditOperation },

    /// The form and the original describe different kinds of entity.
    #[error("form is a {form} but the original is a {original}")]
    KindMismatch {
        form: TargetType,
        original: TargetType,
    },

    /// Serialization of a changed value failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
