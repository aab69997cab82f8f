//! Edit details: the minimal delta an edit carries.
//!
//! Each entity kind has a `*Fields` struct holding changed scalar values and
//! a `*Details` struct that adds the set deltas. The new side of an edit is a
//! `*Details`; the old side only needs the scalars, since a set delta already
//! names what was removed.

use serde::{Deserialize, Serialize};

use sbx_types::{
    BodyModification, BreastType, CategoryRef, Ethnicity, EyeColor, Fingerprint, Gender,
    HairColor, Image, PerformerAppearance, StudioRef, TagRef, TargetType, Url,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformerFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_start_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_end_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cup_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breast_type: Option<BreastType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<Ethnicity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<EyeColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<HairColor>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformerDetails {
    #[serde(flatten)]
    pub fields: PerformerFields,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_aliases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_aliases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_urls: Vec<Url>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_urls: Vec<Url>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_images: Vec<Image>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_images: Vec<Image>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_tattoos: Vec<BodyModification>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_tattoos: Vec<BodyModification>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_piercings: Vec<BodyModification>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_piercings: Vec<BodyModification>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studio: Option<StudioRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDetails {
    #[serde(flatten)]
    pub fields: SceneFields,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_urls: Vec<Url>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_urls: Vec<Url>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_performers: Vec<PerformerAppearance>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_performers: Vec<PerformerAppearance>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_tags: Vec<TagRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_tags: Vec<TagRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_images: Vec<Image>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_images: Vec<Image>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_fingerprints: Vec<Fingerprint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_fingerprints: Vec<Fingerprint>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<StudioRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioDetails {
    #[serde(flatten)]
    pub fields: StudioFields,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_aliases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_aliases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_urls: Vec<Url>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_urls: Vec<Url>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_images: Vec<Image>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_images: Vec<Image>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagDetails {
    #[serde(flatten)]
    pub fields: TagFields,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_aliases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_aliases: Vec<String>,
}

/// The new side of an edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditDetails {
    Performer(PerformerDetails),
    Scene(SceneDetails),
    Studio(StudioDetails),
    Tag(TagDetails),
}

/// The old side of an edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OldEditDetails {
    Performer(PerformerFields),
    Scene(SceneFields),
    Studio(StudioFields),
    Tag(TagFields),
}

impl EditDetails {
    pub fn target_type(&self) -> TargetType {
        match self {
            Self::Performer(_) => TargetType::Performer,
            Self::Scene(_) => TargetType::Scene,
            Self::Studio(_) => TargetType::Studio,
            Self::Tag(_) => TargetType::Tag,
        }
    }
}

impl OldEditDetails {
    pub fn target_type(&self) -> TargetType {
        match self {
            Self::Performer(_) => TargetType::Performer,
            Self::Scene(_) => TargetType::Scene,
            Self::Studio(_) => TargetType::Studio,
            Self::Tag(_) => TargetType::Tag,
        }
    }
}
