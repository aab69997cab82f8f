use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{VoteError, VoteResult};

/// Voting rules. Periods are in seconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteConfig {
    /// How long an edit stays open for votes.
    pub voting_period: u64,
    /// Minimum age before a destructive edit may be applied, and the
    /// shortened period once enough votes are in.
    pub min_destructive_voting_period: u64,
    /// Unanimous votes needed to resolve an edit early. `0` disables early
    /// resolution.
    pub vote_application_threshold: u32,
    /// Accepted edits a user needs before being promoted to voter.
    pub vote_promotion_threshold: u32,
}

impl Default for VoteConfig {
    fn default() -> Self {
        Self {
            voting_period: 345_600,
            min_destructive_voting_period: 172_800,
            vote_application_threshold: 3,
            vote_promotion_threshold: 10,
        }
    }
}

impl VoteConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> VoteResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| VoteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> VoteResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> VoteResult<()> {
        if self.voting_period == 0 {
            return Err(VoteError::Config("voting_period must be positive".into()));
        }
        if self.min_destructive_voting_period > self.voting_period {
            return Err(VoteError::Config(format!(
                "min_destructive_voting_period ({}) exceeds voting_period ({})",
                self.min_destructive_voting_period, self.voting_period
            )));
        }
        if i64::try_from(self.voting_period).is_err() {
            return Err(VoteError::Config("voting_period is out of range".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = VoteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.voting_period, 345_600);
        assert_eq!(config.vote_application_threshold, 3);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = VoteConfig::from_toml_str("vote_application_threshold = 5\n").unwrap();
        assert_eq!(config.vote_application_threshold, 5);
        assert_eq!(config.min_destructive_voting_period, 172_800);
    }

    #[test]
    fn rejects_inverted_periods() {
        let err = VoteConfig::from_toml_str(
            "voting_period = 100\nmin_destructive_voting_period = 200\n",
        )
        .unwrap_err();
        assert!(matches!(err, VoteError::Config(_)));
    }

    #[test]
    fn rejects_zero_period() {
        assert!(VoteConfig::from_toml_str("voting_period = 0\nmin_destructive_voting_period = 0\n").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            VoteConfig::from_toml_str("voting_period = \"soon\""),
            Err(VoteError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            VoteConfig::load("/nonexistent/sbx-vote.toml"),
            Err(VoteError::Io(_))
        ));
    }
}
