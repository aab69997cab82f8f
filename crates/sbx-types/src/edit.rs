use std::fmt;

use serde::{Deserialize, Serialize};

/// What an edit does to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditOperation {
    /// A new entity; there is no prior state.
    Create,
    /// Changes to exactly one existing entity.
    Modify,
    /// One target absorbs one or more sources, which stop existing.
    Merge,
    /// Deletion; carries no new details.
    Destroy,
}

impl EditOperation {
    /// Whether the operation acts on an existing target.
    pub fn requires_target(&self) -> bool {
        !matches!(self, Self::Create)
    }

    /// Whether the edit carries new details.
    pub fn carries_details(&self) -> bool {
        !matches!(self, Self::Destroy)
    }
}

impl fmt::Display for EditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "Create"),
            Self::Modify => write!(f, "Modify"),
            Self::Merge => write!(f, "Merge"),
            Self::Destroy => write!(f, "Destroy"),
        }
    }
}

/// Lifecycle state of an edit.
///
/// Everything starts `Pending`; every other state is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    ImmediateAccepted,
    ImmediateRejected,
    Applied,
    Failed,
    Canceled,
}

impl VoteStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether the edit ended up changing data.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted | Self::ImmediateAccepted | Self::Applied)
    }
}

impl fmt::Display for VoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Accepted => write!(f, "Accepted"),
            Self::Rejected => write!(f, "Rejected"),
            Self::ImmediateAccepted => write!(f, "Admin Accepted"),
            Self::ImmediateRejected => write!(f, "Admin Rejected"),
            Self::Applied => write!(f, "Applied"),
            Self::Failed => write!(f, "Failed"),
            Self::Canceled => write!(f, "Cancelled"),
        }
    }
}

/// A single voter's ballot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteType {
    Accept,
    Reject,
    Abstain,
    ImmediateAccept,
    ImmediateReject,
}

impl VoteType {
    /// Contribution to the net vote count.
    pub fn weight(&self) -> i32 {
        match self {
            Self::Accept => 1,
            Self::Reject => -1,
            Self::Abstain | Self::ImmediateAccept | Self::ImmediateReject => 0,
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => write!(f, "Yes"),
            Self::Reject => write!(f, "No"),
            Self::Abstain => write!(f, "Abstain"),
            Self::ImmediateAccept => write!(f, "Admin Accept"),
            Self::ImmediateReject => write!(f, "Admin Reject"),
        }
    }
}
