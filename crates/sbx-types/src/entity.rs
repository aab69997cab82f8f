//! Immutable entity snapshots and the relationship members they carry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::{BreastType, Ethnicity, EyeColor, FingerprintAlgorithm, Gender, HairColor};
use crate::fuzzy_date::FuzzyDate;
use crate::id::EntityId;
use crate::measurements::Measurements;

// ---------------------------------------------------------------------------
// Relationship members
// ---------------------------------------------------------------------------

/// The site a URL belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Site {
    pub id: EntityId,
    pub name: String,
}

/// An external link attached to an entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Url {
    pub url: String,
    pub site: Site,
}

impl Url {
    pub fn new(url: impl Into<String>, site: Site) -> Self {
        Self {
            url: url.into(),
            site,
        }
    }
}

/// A hosted image.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    pub id: EntityId,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// A tattoo or piercing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyModification {
    pub location: String,
    pub description: Option<String>,
}

impl BodyModification {
    pub fn new(location: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            location: location.into(),
            description: description.map(str::to_string),
        }
    }
}

impl fmt::Display for BodyModification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description.as_deref() {
            Some(desc) if !desc.is_empty() => write!(f, "{} ({desc})", self.location),
            _ => f.write_str(&self.location),
        }
    }
}

/// A scene file hash submitted by users.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint {
    pub hash: String,
    pub algorithm: FingerprintAlgorithm,
    pub duration: u32,
}

/// Link to a performer, as carried on a scene.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerformerRef {
    pub id: EntityId,
    pub name: String,
    pub disambiguation: Option<String>,
    pub gender: Option<Gender>,
}

/// A performer credited on a scene, optionally under another name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerformerAppearance {
    pub performer: PerformerRef,
    #[serde(rename = "as")]
    pub as_name: Option<String>,
}

/// Link to a studio.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudioRef {
    pub id: EntityId,
    pub name: String,
}

/// Link to a tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagRef {
    pub id: EntityId,
    pub name: String,
}

/// Link to a tag category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: EntityId,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performer {
    pub id: EntityId,
    pub name: String,
    pub disambiguation: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub gender: Option<Gender>,
    pub birthdate: Option<FuzzyDate>,
    pub career_start_year: Option<i32>,
    pub career_end_year: Option<i32>,
    pub height: Option<i32>,
    #[serde(default)]
    pub measurements: Measurements,
    pub breast_type: Option<BreastType>,
    pub country: Option<String>,
    pub ethnicity: Option<Ethnicity>,
    pub eye_color: Option<EyeColor>,
    pub hair_color: Option<HairColor>,
    #[serde(default)]
    pub tattoos: Vec<BodyModification>,
    #[serde(default)]
    pub piercings: Vec<BodyModification>,
    #[serde(default)]
    pub urls: Vec<Url>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Performer {
    /// `Name (disambiguation)`, or just the name.
    pub fn display_name(&self) -> String {
        match self.disambiguation.as_deref() {
            Some(d) if !d.is_empty() => format!("{} ({d})", self.name),
            _ => self.name.clone(),
        }
    }

    pub fn to_ref(&self) -> PerformerRef {
        PerformerRef {
            id: self.id,
            name: self.name.clone(),
            disambiguation: self.disambiguation.clone(),
            gender: self.gender,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: EntityId,
    pub title: Option<String>,
    pub details: Option<String>,
    pub date: Option<FuzzyDate>,
    /// Length in seconds.
    pub duration: Option<u32>,
    pub director: Option<String>,
    pub code: Option<String>,
    pub studio: Option<StudioRef>,
    #[serde(default)]
    pub performers: Vec<PerformerAppearance>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
    #[serde(default)]
    pub urls: Vec<Url>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub fingerprints: Vec<Fingerprint>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Studio {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub parent: Option<StudioRef>,
    #[serde(default)]
    pub urls: Vec<Url>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Studio {
    pub fn to_ref(&self) -> StudioRef {
        StudioRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub category: Option<CategoryRef>,
}

impl Tag {
    pub fn to_ref(&self) -> TagRef {
        TagRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// The kind of entity an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    Performer,
    Scene,
    Studio,
    Tag,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Performer => write!(f, "Performer"),
            Self::Scene => write!(f, "Scene"),
            Self::Studio => write!(f, "Studio"),
            Self::Tag => write!(f, "Tag"),
        }
    }
}

/// A snapshot of any editable entity, tagged with its kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Entity {
    Performer(Performer),
    Scene(Scene),
    Studio(Studio),
    Tag(Tag),
}

impl Entity {
    pub fn target_type(&self) -> TargetType {
        match self {
            Self::Performer(_) => TargetType::Performer,
            Self::Scene(_) => TargetType::Scene,
            Self::Studio(_) => TargetType::Studio,
            Self::Tag(_) => TargetType::Tag,
        }
    }

    pub fn id(&self) -> &EntityId {
        match self {
            Self::Performer(p) => &p.id,
            Self::Scene(s) => &s.id,
            Self::Studio(s) => &s.id,
            Self::Tag(t) => &t.id,
        }
    }

    /// Name used when listing an edit target. Untitled scenes fall back to
    /// their id.
    pub fn display_name(&self) -> String {
        match self {
            Self::Performer(p) => p.display_name(),
            Self::Scene(s) => match s.title.as_deref() {
                Some(title) if !title.is_empty() => title.to_string(),
                _ => s.id.to_string(),
            },
            Self::Studio(s) => s.name.clone(),
            Self::Tag(t) => t.name.clone(),
        }
    }
}
