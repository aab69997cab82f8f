//! Vote outcome prediction and expiration.
//!
//! Non-destructive edits pass unless someone objects. Destructive edits
//! need at least one net positive vote, so silence never deletes data.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::VoteConfig;
use crate::error::{VoteError, VoteResult};
use crate::tally::EditTally;

/// Advisory outcome of a pending vote. Recomputed on every read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotePrediction {
    pub will_pass: bool,
    /// When the outcome takes effect.
    pub qualifying_instant: DateTime<Utc>,
}

/// Whether enough votes are in for the shortened voting period.
pub fn is_short_voting_period(vote_count: i32, application_threshold: u32) -> bool {
    application_threshold > 0 && i64::from(vote_count) >= i64::from(application_threshold)
}

/// Predict whether an edit with `vote_count` net votes will pass.
pub fn predict(
    vote_count: i32,
    destructive: bool,
    application_threshold: u32,
    expires_at: DateTime<Utc>,
) -> VotePrediction {
    let short = is_short_voting_period(vote_count, application_threshold);
    let pass_threshold = if destructive { 1 } else { 0 };
    VotePrediction {
        will_pass: short || vote_count >= pass_threshold,
        qualifying_instant: expires_at,
    }
}

/// Prediction and expiration over a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct VotePredictor {
    config: VoteConfig,
}

impl VotePredictor {
    pub fn new(config: VoteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VoteConfig {
        &self.config
    }

    pub fn is_short_voting_period(&self, tally: &EditTally) -> bool {
        is_short_voting_period(tally.vote_count, self.config.vote_application_threshold)
    }

    /// When voting on a pending edit closes: the voting period (or the
    /// shortened period once the application threshold is reached) after
    /// the edit was opened or last amended. `None` for closed edits.
    pub fn expiration(&self, tally: &EditTally) -> Option<DateTime<Utc>> {
        if !tally.status.is_pending() {
            return None;
        }
        let seconds = if self.is_short_voting_period(tally) {
            self.config.min_destructive_voting_period
        } else {
            self.config.voting_period
        };
        let period = TimeDelta::try_seconds(i64::try_from(seconds).ok()?)?;
        tally.voting_started_at().checked_add_signed(period)
    }

    /// Predict a pending edit that has an expiration.
    pub fn predict_edit(&self, tally: &EditTally) -> VoteResult<VotePrediction> {
        if !tally.status.is_pending() {
            return Err(VoteError::NotPending(tally.status));
        }
        let expires_at = tally.expires_at.ok_or(VoteError::MissingExpiration)?;
        let prediction = predict(
            tally.vote_count,
            tally.destructive,
            self.config.vote_application_threshold,
            expires_at,
        );
        debug!(
            vote_count = tally.vote_count,
            destructive = tally.destructive,
            will_pass = prediction.will_pass,
            "predicted vote outcome"
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use sbx_types::VoteStatus;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn silence_does_not_destroy() {
        assert!(!predict(0, true, 0, instant()).will_pass);
        assert!(predict(0, false, 0, instant()).will_pass);
    }

    #[test]
    fn threshold_reached_passes_destructive() {
        assert!(predict(3, true, 3, instant()).will_pass);
        assert!(predict(1, true, 3, instant()).will_pass);
    }

    #[test]
    fn objection_fails_non_destructive() {
        assert!(!predict(-1, false, 3, instant()).will_pass);
    }

    #[test]
    fn zero_threshold_never_shortens() {
        assert!(!is_short_voting_period(10, 0));
        assert!(is_short_voting_period(3, 3));
        assert!(!is_short_voting_period(2, 3));
    }

    #[test]
    fn predict_edit_requires_pending_with_expiration() {
        let predictor = VotePredictor::default();
        let mut tally = EditTally::pending(instant());
        assert!(matches!(
            predictor.predict_edit(&tally),
            Err(VoteError::MissingExpiration)
        ));

        tally.expires_at = predictor.expiration(&tally);
        let prediction = predictor.predict_edit(&tally).unwrap();
        assert!(prediction.will_pass);
        assert_eq!(Some(prediction.qualifying_instant), tally.expires_at);

        tally.status = VoteStatus::Accepted;
        assert!(matches!(
            predictor.predict_edit(&tally),
            Err(VoteError::NotPending(VoteStatus::Accepted))
        ));
    }

    #[test]
    fn expiration_uses_short_period_at_threshold() {
        let predictor = VotePredictor::default();
        let mut tally = EditTally::pending(instant());
        assert_eq!(
            predictor.expiration(&tally),
            Some(instant() + TimeDelta::seconds(345_600))
        );

        tally.vote_count = 3;
        assert_eq!(
            predictor.expiration(&tally),
            Some(instant() + TimeDelta::seconds(172_800))
        );
    }

    #[test]
    fn expiration_counts_from_amendment() {
        let predictor = VotePredictor::default();
        let mut tally = EditTally::pending(instant());
        let amended = instant() + TimeDelta::hours(5);
        tally.updated_at = Some(amended);
        assert_eq!(
            predictor.expiration(&tally),
            Some(amended + TimeDelta::seconds(345_600))
        );
    }

    #[test]
    fn closed_edits_have_no_expiration() {
        let predictor = VotePredictor::default();
        let mut tally = EditTally::pending(instant());
        tally.status = VoteStatus::Rejected;
        assert_eq!(predictor.expiration(&tally), None);
    }

    proptest! {
        #[test]
        fn positive_votes_always_pass(count in 1i32..100, destructive in any::<bool>(), threshold in 0u32..10) {
            prop_assert!(predict(count, destructive, threshold, instant()).will_pass);
        }

        #[test]
        fn negative_votes_below_threshold_fail(count in -100i32..0, destructive in any::<bool>(), threshold in 0u32..10) {
            prop_assert!(!predict(count, destructive, threshold, instant()).will_pass);
        }
    }
}
