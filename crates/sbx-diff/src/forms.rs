//! Edit forms: the proposed state of an entity as a reviewer submitted it.
//!
//! Forms keep a few values in their typed-in text encoding (birthdate, bra
//! size, scene date and duration) because the engines compare them in that
//! encoding.

use serde::{Deserialize, Serialize};

use sbx_types::{
    format_duration, format_fuzzy_date, BodyModification, BreastType, CategoryRef, Ethnicity,
    EyeColor, Fingerprint, Gender, HairColor, Image, Performer, PerformerAppearance, PerformerRef,
    Scene, Studio, StudioRef, Tag, TagRef, TargetType, Url,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformerForm {
    pub name: String,
    pub disambiguation: Option<String>,
    pub aliases: Vec<String>,
    pub gender: Option<Gender>,
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    pub birthdate: Option<String>,
    pub career_start_year: Option<i32>,
    pub career_end_year: Option<i32>,
    pub height: Option<i32>,
    /// Combined band and cup, e.g. `34C`.
    pub bra_size: Option<String>,
    pub waist_size: Option<u32>,
    pub hip_size: Option<u32>,
    pub breast_type: Option<BreastType>,
    pub country: Option<String>,
    pub ethnicity: Option<Ethnicity>,
    pub eye_color: Option<EyeColor>,
    pub hair_color: Option<HairColor>,
    pub tattoos: Vec<BodyModification>,
    pub piercings: Vec<BodyModification>,
    pub urls: Vec<Url>,
    pub images: Vec<Image>,
}

impl PerformerForm {
    /// A form pre-filled with the current state of `performer`.
    pub fn from_performer(performer: &Performer) -> Self {
        Self {
            name: performer.name.clone(),
            disambiguation: performer.disambiguation.clone(),
            aliases: performer.aliases.clone(),
            gender: performer.gender,
            birthdate: format_fuzzy_date(performer.birthdate.as_ref()),
            career_start_year: performer.career_start_year,
            career_end_year: performer.career_end_year,
            height: performer.height,
            bra_size: performer.measurements.bra_size(),
            waist_size: performer.measurements.waist,
            hip_size: performer.measurements.hip,
            breast_type: performer.breast_type,
            country: performer.country.clone(),
            ethnicity: performer.ethnicity,
            eye_color: performer.eye_color,
            hair_color: performer.hair_color,
            tattoos: performer.tattoos.clone(),
            piercings: performer.piercings.clone(),
            urls: performer.urls.clone(),
            images: performer.images.clone(),
        }
    }
}

/// A performer slot on the scene form. The performer is unset while the
/// reviewer has not picked one yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenePerformerInput {
    pub performer: Option<PerformerRef>,
    #[serde(rename = "as")]
    pub as_name: Option<String>,
}

impl ScenePerformerInput {
    /// The appearance this slot describes, if it names a resolvable
    /// performer. A blank credited name counts as no alias.
    pub fn to_appearance(&self) -> Option<PerformerAppearance> {
        let performer = self.performer.as_ref()?;
        if performer.id.as_uuid().is_nil() || performer.name.is_empty() {
            return None;
        }
        Some(PerformerAppearance {
            performer: performer.clone(),
            as_name: self
                .as_name
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }
}

impl From<&PerformerAppearance> for ScenePerformerInput {
    fn from(appearance: &PerformerAppearance) -> Self {
        Self {
            performer: Some(appearance.performer.clone()),
            as_name: appearance.as_name.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneForm {
    pub title: Option<String>,
    pub details: Option<String>,
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    pub date: Option<String>,
    /// `s`, `m:ss` or `h:mm:ss`.
    pub duration: Option<String>,
    pub director: Option<String>,
    pub code: Option<String>,
    pub studio: Option<StudioRef>,
    pub performers: Vec<ScenePerformerInput>,
    pub tags: Vec<TagRef>,
    pub urls: Vec<Url>,
    pub images: Vec<Image>,
    pub fingerprints: Vec<Fingerprint>,
}

impl SceneForm {
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            title: scene.title.clone(),
            details: scene.details.clone(),
            date: format_fuzzy_date(scene.date.as_ref()),
            duration: scene.duration.filter(|d| *d > 0).map(format_duration),
            director: scene.director.clone(),
            code: scene.code.clone(),
            studio: scene.studio.clone(),
            performers: scene.performers.iter().map(ScenePerformerInput::from).collect(),
            tags: scene.tags.clone(),
            urls: scene.urls.clone(),
            images: scene.images.clone(),
            fingerprints: scene.fingerprints.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioForm {
    pub name: String,
    pub aliases: Vec<String>,
    pub parent: Option<StudioRef>,
    pub urls: Vec<Url>,
    pub images: Vec<Image>,
}

impl StudioForm {
    pub fn from_studio(studio: &Studio) -> Self {
        Self {
            name: studio.name.clone(),
            aliases: studio.aliases.clone(),
            parent: studio.parent.clone(),
            urls: studio.urls.clone(),
            images: studio.images.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagForm {
    pub name: String,
    pub description: Option<String>,
    pub aliases: Vec<String>,
    pub category: Option<CategoryRef>,
}

impl TagForm {
    pub fn from_tag(tag: &Tag) -> Self {
        Self {
            name: tag.name.clone(),
            description: tag.description.clone(),
            aliases: tag.aliases.clone(),
            category: tag.category.clone(),
        }
    }
}

/// A submitted form of any kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityForm {
    Performer(PerformerForm),
    Scene(SceneForm),
    Studio(StudioForm),
    Tag(TagForm),
}

impl EntityForm {
    pub fn target_type(&self) -> TargetType {
        match self {
            Self::Performer(_) => TargetType::Performer,
            Self::Scene(_) => TargetType::Scene,
            Self::Studio(_) => TargetType::Studio,
            Self::Tag(_) => TargetType::Tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbx_types::{EntityId, FuzzyDate, Measurements};

    #[test]
    fn performer_form_encodes_text_fields() {
        let performer = Performer {
            name: "Jane".into(),
            birthdate: FuzzyDate::month(1990, 5),
            measurements: Measurements {
                band_size: Some(34),
                cup_size: Some("C".into()),
                waist: Some(24),
                hip: Some(36),
            },
            ..Default::default()
        };
        let form = PerformerForm::from_performer(&performer);
        assert_eq!(form.birthdate.as_deref(), Some("1990-05"));
        assert_eq!(form.bra_size.as_deref(), Some("34C"));
        assert_eq!(form.waist_size, Some(24));
    }

    #[test]
    fn scene_form_formats_duration() {
        let scene = Scene {
            duration: Some(3723),
            ..Default::default()
        };
        assert_eq!(SceneForm::from_scene(&scene).duration.as_deref(), Some("1:02:03"));
        assert_eq!(SceneForm::from_scene(&Scene::default()).duration, None);
    }

    #[test]
    fn unpicked_performer_slot_has_no_appearance() {
        assert!(ScenePerformerInput::default().to_appearance().is_none());

        let nameless = ScenePerformerInput {
            performer: Some(PerformerRef {
                id: EntityId::from_u128(1),
                name: String::new(),
                disambiguation: None,
                gender: None,
            }),
            as_name: None,
        };
        assert!(nameless.to_appearance().is_none());
    }

    #[test]
    fn blank_credit_is_dropped() {
        let slot = ScenePerformerInput {
            performer: Some(PerformerRef {
                id: EntityId::from_u128(1),
                name: "Jane".into(),
                disambiguation: None,
                gender: None,
            }),
            as_name: Some("  ".into()),
        };
        assert_eq!(slot.to_appearance().and_then(|a| a.as_name), None);
    }

    #[test]
    fn form_serde_is_tagged() {
        let form = EntityForm::Tag(TagForm {
            name: "Outdoor".into(),
            ..Default::default()
        });
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["type"], "TAG");
        assert_eq!(form.target_type(), TargetType::Tag);
    }
}
