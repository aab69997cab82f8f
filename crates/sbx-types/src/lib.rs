//! Foundation types for sbx.
//!
//! This crate provides the entity snapshots, identities and value codecs used
//! throughout the edit engine. Every other sbx crate depends on `sbx-types`.
//!
//! # Key Types
//!
//! - [`EntityId`] -- Opaque entity identifier (UUID)
//! - [`Entity`] -- Tagged snapshot of a performer, scene, studio or tag
//! - [`FuzzyDate`] -- Calendar date carried at year, month or day precision
//! - [`Measurements`] -- Band/cup/waist/hip, with bra size and measurement codecs
//! - [`EditOperation`] / [`VoteStatus`] / [`VoteType`] -- Edit lifecycle enums
//! - [`Labeled`] -- Canonical enum values with human display labels

pub mod duration;
pub mod edit;
pub mod entity;
pub mod enums;
pub mod error;
pub mod fuzzy_date;
pub mod id;
pub mod measurements;

pub use duration::{format_duration, parse_duration};
pub use edit::{EditOperation, VoteStatus, VoteType};
pub use entity::{
    BodyModification, CategoryRef, Entity, Fingerprint, Image, Performer, PerformerAppearance,
    PerformerRef, Scene, Site, Studio, StudioRef, Tag, TagRef, TargetType, Url,
};
pub use enums::{BreastType, Ethnicity, EyeColor, FingerprintAlgorithm, Gender, HairColor, Labeled};
pub use error::{TypeError, TypeResult};
pub use fuzzy_date::{format_fuzzy_date, DateAccuracy, FuzzyDate};
pub use id::EntityId;
pub use measurements::{compose_bra_size, parse_bra_size, parse_measurements, Measurements};
