//! Draft records as they arrive from an import or scrape.
//!
//! Free text is kept verbatim. References to other entities are either
//! already matched to a known entity or carry only the name that was seen.

use serde::{Deserialize, Serialize};

use sbx_types::{EntityId, Fingerprint, Image, PerformerRef, StudioRef, TagRef, TargetType, Url};

/// A reference slot in a draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DraftEntity<T> {
    /// Matched to a known entity.
    Resolved(T),
    /// Only a name; nothing matched yet.
    Unresolved { name: String },
}

impl<T> DraftEntity<T> {
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::Unresolved { .. } => None,
        }
    }

    pub fn unresolved_name(&self) -> Option<&str> {
        match self {
            Self::Resolved(_) => None,
            Self::Unresolved { name } => Some(name),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformerDraft {
    /// Set when the draft updates an existing performer.
    pub id: Option<EntityId>,
    pub name: String,
    pub aliases: Vec<String>,
    pub gender: Option<String>,
    pub birthdate: Option<String>,
    pub height: Option<String>,
    pub country: Option<String>,
    pub ethnicity: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
    pub breast_type: Option<String>,
    /// `band+cup-waist-hip`, e.g. `34C-24-36`.
    pub measurements: Option<String>,
    pub tattoos: Option<String>,
    pub piercings: Option<String>,
    pub urls: Vec<Url>,
    pub image: Option<Image>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDraft {
    /// Set when the draft updates an existing scene.
    pub id: Option<EntityId>,
    pub title: Option<String>,
    pub details: Option<String>,
    pub date: Option<String>,
    pub url: Option<Url>,
    pub image: Option<Image>,
    pub studio: Option<DraftEntity<StudioRef>>,
    pub performers: Vec<DraftEntity<PerformerRef>>,
    pub tags: Vec<DraftEntity<TagRef>>,
    pub fingerprints: Vec<Fingerprint>,
}

/// A draft of either kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Draft {
    Performer(PerformerDraft),
    Scene(SceneDraft),
}

impl Draft {
    pub fn target_type(&self) -> TargetType {
        match self {
            Self::Performer(_) => TargetType::Performer,
            Self::Scene(_) => TargetType::Scene,
        }
    }

    /// The entity this draft updates, if any.
    pub fn target_id(&self) -> Option<EntityId> {
        match self {
            Self::Performer(d) => d.id,
            Self::Scene(d) => d.id,
        }
    }
}
