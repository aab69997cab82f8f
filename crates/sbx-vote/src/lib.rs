//! Vote engine for sbx.
//!
//! Every edit is voted on before it is applied. This crate predicts the
//! outcome of a pending vote, computes when voting closes, resolves edits
//! early once the application threshold is met, and classifies edits as
//! destructive. Nothing here changes persisted state.
//!
//! # Key Types
//!
//! - [`VoteConfig`] -- Voting periods and thresholds, loadable from TOML
//! - [`EditTally`] / [`Vote`] -- Vote state of an edit
//! - [`VotePredictor`] / [`VotePrediction`] -- Outcome prediction and expiration
//! - [`EditSummary`] -- Input to destructive-edit classification
//! - [`ViewerContext`] -- Explicit viewer identity

pub mod config;
pub mod destructive;
pub mod error;
pub mod predict;
pub mod tally;
pub mod threshold;
pub mod viewer;

pub use config::VoteConfig;
pub use destructive::{is_destructive, EditSummary};
pub use error::{VoteError, VoteResult};
pub use predict::{is_short_voting_period, predict, VotePrediction, VotePredictor};
pub use tally::{net_vote_count, EditTally, Vote};
pub use threshold::resolve_voting_threshold;
pub use viewer::ViewerContext;
