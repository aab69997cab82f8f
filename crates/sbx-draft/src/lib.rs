//! Draft reconciliation for sbx.
//!
//! Imported drafts are partly structured and partly free text. This crate
//! folds a draft into the edit form of the entity it targets and separates
//! out the text that could not be matched, so a reviewer can handle it.
//!
//! # Key Types
//!
//! - [`Draft`] / [`PerformerDraft`] / [`SceneDraft`] -- Incoming draft records
//! - [`DraftEntity`] -- A reference slot, resolved or name-only
//! - [`UnmatchedFields`] -- Leftover draft text, by field
//! - [`Reconciled`] -- Seeded form plus unmatched text

pub mod draft;
pub mod error;
pub mod performer;
pub mod reconcile;
pub mod scene;
pub mod unmatched;

pub use draft::{Draft, DraftEntity, PerformerDraft, SceneDraft};
pub use error::{DraftError, DraftResult};
pub use performer::{draft_url_key, reconcile_performer};
pub use reconcile::{reconcile, Reconciled};
pub use scene::reconcile_scene;
pub use unmatched::{prepend_unique, UnmatchedField, UnmatchedFields};
