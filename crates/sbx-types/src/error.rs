use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid entity id: {0}")]
    InvalidId(String),

    #[error("invalid fuzzy date: {0:?}")]
    InvalidFuzzyDate(String),

    #[error("unknown {kind} value: {value:?}")]
    UnknownLabel { kind: &'static str, value: String },
}

/// Convenience alias for type-level results.
pub type TypeResult<T> = Result<T, TypeError>;
