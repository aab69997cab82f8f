//! Error types for draft reconciliation.

use sbx_types::{EntityId, TargetType};

/// Caller contract violations. Unparseable draft text is never an error;
/// it is reported through the unmatched fields instead.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    /// The existing entity is not the kind the draft describes.
    #[error("draft is a {draft} but the existing entity is a {existing}")]
    KindMismatch {
        draft: TargetType,
        existing: TargetType,
    },

    /// The draft updates an entity that was not supplied.
    #[error("draft targets {0} but no existing entity was given")]
    MissingTarget(EntityId),

    /// The draft updates a different entity than the one supplied.
    #[error("draft targets {expected} but the existing entity is {actual}")]
    TargetMismatch { expected: EntityId, actual: EntityId },
}

/// Convenience alias for draft results.
pub type DraftResult<T> = Result<T, DraftError>;
