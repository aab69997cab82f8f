//! Early resolution of an edit once enough unanimous votes are in.

use chrono::{DateTime, Utc};
use tracing::debug;

use sbx_types::{VoteStatus, VoteType};

use crate::config::VoteConfig;
use crate::tally::{EditTally, Vote};

/// Decide whether an edit can be resolved before its voting period ends.
///
/// Returns `Accepted` or `Rejected` when the application threshold is met
/// by unanimous votes, and `Pending` otherwise. Destructive edits also
/// stay pending until they are older than the minimum destructive period.
pub fn resolve_voting_threshold(
    config: &VoteConfig,
    tally: &EditTally,
    votes: &[Vote],
    now: DateTime<Utc>,
) -> VoteStatus {
    let threshold = config.vote_application_threshold as usize;
    if threshold == 0 {
        return VoteStatus::Pending;
    }

    if tally.destructive {
        let age = now.signed_duration_since(tally.created_at).num_seconds();
        let minimum = i64::try_from(config.min_destructive_voting_period).unwrap_or(i64::MAX);
        if age <= minimum {
            debug!(age, minimum, "destructive edit too young to resolve");
            return VoteStatus::Pending;
        }
    }

    let positive = votes.iter().filter(|v| v.vote == VoteType::Accept).count();
    let negative = votes.iter().filter(|v| v.vote == VoteType::Reject).count();

    if positive >= threshold && negative == 0 {
        VoteStatus::Accepted
    } else if negative >= threshold && positive == 0 {
        VoteStatus::Rejected
    } else {
        VoteStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use sbx_types::EntityId;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()
    }

    fn votes(kinds: &[VoteType]) -> Vec<Vote> {
        kinds
            .iter()
            .enumerate()
            .map(|(i, vote)| Vote {
                user_id: EntityId::from_u128(i as u128 + 1),
                vote: *vote,
            })
            .collect()
    }

    #[test]
    fn unanimous_accepts_resolve() {
        let config = VoteConfig::default();
        let tally = EditTally::pending(created());
        let ballots = votes(&[VoteType::Accept, VoteType::Accept, VoteType::Accept, VoteType::Abstain]);
        assert_eq!(
            resolve_voting_threshold(&config, &tally, &ballots, created()),
            VoteStatus::Accepted
        );
    }

    #[test]
    fn unanimous_rejects_resolve() {
        let config = VoteConfig::default();
        let tally = EditTally::pending(created());
        let ballots = votes(&[VoteType::Reject; 3]);
        assert_eq!(
            resolve_voting_threshold(&config, &tally, &ballots, created()),
            VoteStatus::Rejected
        );
    }

    #[test]
    fn split_vote_stays_pending() {
        let config = VoteConfig::default();
        let tally = EditTally::pending(created());
        let ballots = votes(&[VoteType::Accept, VoteType::Accept, VoteType::Accept, VoteType::Reject]);
        assert_eq!(
            resolve_voting_threshold(&config, &tally, &ballots, created()),
            VoteStatus::Pending
        );
    }

    #[test]
    fn disabled_threshold_stays_pending() {
        let config = VoteConfig {
            vote_application_threshold: 0,
            ..Default::default()
        };
        let tally = EditTally::pending(created());
        let ballots = votes(&[VoteType::Accept; 5]);
        assert_eq!(
            resolve_voting_threshold(&config, &tally, &ballots, created()),
            VoteStatus::Pending
        );
    }

    #[test]
    fn young_destructive_edit_waits() {
        let config = VoteConfig::default();
        let mut tally = EditTally::pending(created());
        tally.destructive = true;
        let ballots = votes(&[VoteType::Accept; 3]);

        let early = created() + TimeDelta::seconds(172_800);
        assert_eq!(
            resolve_voting_threshold(&config, &tally, &ballots, early),
            VoteStatus::Pending
        );

        let later = early + TimeDelta::seconds(1);
        assert_eq!(
            resolve_voting_threshold(&config, &tally, &ballots, later),
            VoteStatus::Accepted
        );
    }
}
