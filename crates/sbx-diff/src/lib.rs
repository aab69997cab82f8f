//! Diff engine for sbx.
//!
//! Computes the minimal delta between the current state of an entity and a
//! submitted edit form, and normalizes it into a change set for review.
//!
//! # Key Types
//!
//! - [`SetDiff`] / [`diff_keyed`] -- Keyed add/remove diff of a relationship collection
//! - [`diff_value`] / [`Scalar`] -- Scalar diff with "falsy is absent" semantics
//! - [`EntityForm`] -- Proposed entity state as a reviewer submitted it
//! - [`EditDetails`] / [`OldEditDetails`] -- The two halves of an edit
//! - [`ChangeSet`] / [`FieldChange`] -- Display-ready field changes

pub mod change_set;
pub mod details;
pub mod engine;
pub mod error;
pub mod forms;
pub mod keys;
pub mod performer;
pub mod scene;
pub mod set_diff;
pub mod studio;
pub mod tag;
pub mod value;

pub use change_set::{ChangeSet, FieldChange, FieldEntry};
pub use details::{
    EditDetails, OldEditDetails, PerformerDetails, PerformerFields, SceneDetails, SceneFields,
    StudioDetails, StudioFields, TagDetails, TagFields,
};
pub use engine::{compute_change_set, compute_edit, diff_entity, EditChanges};
pub use error::{DiffError, DiffResult};
pub use forms::{EntityForm, PerformerForm, SceneForm, ScenePerformerInput, StudioForm, TagForm};
pub use performer::diff_performer;
pub use scene::diff_scene;
pub use set_diff::{diff_keyed, SetDiff};
pub use studio::diff_studio;
pub use tag::diff_tag;
pub use value::{diff_link, diff_value, Link, Presence, Scalar};
