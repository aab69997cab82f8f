//! Vote state of a single edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sbx_types::{EntityId, VoteStatus, VoteType};

/// One user's ballot on an edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub user_id: EntityId,
    pub vote: VoteType,
}

/// Net vote count: accepts minus rejects.
pub fn net_vote_count(votes: &[Vote]) -> i32 {
    votes.iter().map(|v| v.vote.weight()).sum()
}

/// The inputs the vote engine needs about an edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTally {
    #[serde(default)]
    pub status: VoteStatus,
    #[serde(default)]
    pub vote_count: i32,
    #[serde(default)]
    pub destructive: bool,
    pub created_at: DateTime<Utc>,
    /// Set when the edit was amended; restarts the voting period.
    pub updated_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl EditTally {
    /// A freshly opened edit.
    pub fn pending(created_at: DateTime<Utc>) -> Self {
        Self {
            status: VoteStatus::Pending,
            vote_count: 0,
            destructive: false,
            created_at,
            updated_at: None,
            expires_at: None,
        }
    }

    /// When the current voting period started.
    pub fn voting_started_at(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}
