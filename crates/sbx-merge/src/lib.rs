//! Merge engine for sbx.
//!
//! A MERGE edit folds one or more source entities into a surviving target.
//! This crate computes what the sources contribute (alias and image
//! candidates), the default alias-propagation policy, and the initial form
//! a reviewer edits.
//!
//! # Key Types
//!
//! - [`Mergeable`] -- Entities that can be merged (performers, studios, tags)
//! - [`MergeCandidates`] -- Alias and image candidates from the sources
//! - [`MergeSet`] -- Validated target plus sources

pub mod aggregate;
pub mod error;
pub mod merge_set;

pub use aggregate::{aggregate, default_set_merge_aliases, MergeCandidates, Mergeable};
pub use error::{MergeError, MergeResult};
pub use merge_set::MergeSet;
