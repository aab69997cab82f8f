//! The identity of whoever is looking at an edit.

use serde::{Deserialize, Serialize};

use sbx_types::{EntityId, VoteType};

use crate::tally::{EditTally, Vote};

/// Read-only viewer identity, passed in explicitly by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerContext {
    pub user_id: EntityId,
    /// Whether the viewer holds the voting role.
    #[serde(default)]
    pub is_voter: bool,
}

impl ViewerContext {
    pub fn new(user_id: EntityId, is_voter: bool) -> Self {
        Self { user_id, is_voter }
    }

    /// The viewer's own ballot, if they voted.
    pub fn own_vote(&self, votes: &[Vote]) -> Option<VoteType> {
        votes
            .iter()
            .find(|v| v.user_id == self.user_id)
            .map(|v| v.vote)
    }

    pub fn is_own_edit(&self, author_id: EntityId) -> bool {
        self.user_id == author_id
    }

    /// Voters may vote on pending edits they did not author.
    pub fn can_vote(&self, tally: &EditTally, author_id: EntityId) -> bool {
        self.is_voter && tally.status.is_pending() && !self.is_own_edit(author_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sbx_types::VoteStatus;

    #[test]
    fn finds_own_vote() {
        let me = ViewerContext::new(EntityId::from_u128(1), true);
        let votes = [
            Vote {
                user_id: EntityId::from_u128(2),
                vote: VoteType::Reject,
            },
            Vote {
                user_id: EntityId::from_u128(1),
                vote: VoteType::Accept,
            },
        ];
        assert_eq!(me.own_vote(&votes), Some(VoteType::Accept));
        assert_eq!(me.own_vote(&votes[..1]), None);
    }

    #[test]
    fn cannot_vote_on_own_or_closed_edits() {
        let me = ViewerContext::new(EntityId::from_u128(1), true);
        let mut tally = EditTally::pending(Utc::now());
        assert!(me.can_vote(&tally, EntityId::from_u128(2)));
        assert!(!me.can_vote(&tally, EntityId::from_u128(1)));

        tally.status = VoteStatus::Applied;
        assert!(!me.can_vote(&tally, EntityId::from_u128(2)));

        let reader = ViewerContext::new(EntityId::from_u128(3), false);
        tally.status = VoteStatus::Pending;
        assert!(!reader.can_vote(&tally, EntityId::from_u128(2)));
    }
}
