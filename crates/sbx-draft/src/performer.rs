//! Seed a performer form from a draft.

use tracing::debug;

use sbx_diff::PerformerForm;
use sbx_types::{parse_measurements, FuzzyDate, Image, Labeled, Performer, Url};

use crate::draft::PerformerDraft;
use crate::unmatched::{prepend_unique, UnmatchedFields};

/// Dedup key for URLs seeded from a draft: the same link on two sites is
/// kept twice.
pub fn draft_url_key(url: &Url) -> String {
    format!("{}-{}", url.url, url.site.id)
}

pub(crate) fn image_id(image: &Image) -> sbx_types::EntityId {
    image.id
}

/// Non-blank trimmed text.
pub(crate) fn present(text: Option<&String>) -> Option<&str> {
    text.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Resolve free text against a labelled enum. Unknown text is routed to
/// `unmatched` and the current value is kept.
fn resolve_labeled<E: Labeled>(
    text: Option<&String>,
    field: &str,
    current: Option<E>,
    unmatched: &mut UnmatchedFields,
) -> Option<E> {
    let Some(text) = present(text) else {
        return current;
    };
    match E::resolve(text) {
        Some(value) => Some(value),
        None => {
            debug!(field, text, "unmatched enum text");
            unmatched.insert(field, text);
            current
        }
    }
}

/// Merge `draft` into the form for `existing` (or an empty form).
///
/// Draft values override existing ones only when present. Draft collection
/// members are placed ahead of existing ones and win key collisions.
pub fn reconcile_performer(
    draft: &PerformerDraft,
    existing: Option<&Performer>,
) -> (PerformerForm, UnmatchedFields) {
    let mut form = existing
        .map(PerformerForm::from_performer)
        .unwrap_or_default();
    let mut unmatched = UnmatchedFields::new();

    let name = draft.name.trim();
    if !name.is_empty() {
        form.name = name.to_string();
    }

    let aliases: Vec<String> = draft
        .aliases
        .iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect();
    form.aliases = prepend_unique(&aliases, &form.aliases, |a| a.clone());
    form.urls = prepend_unique(&draft.urls, &form.urls, draft_url_key);
    if let Some(image) = &draft.image {
        form.images = prepend_unique(std::slice::from_ref(image), &form.images, image_id);
    }

    form.gender = resolve_labeled(draft.gender.as_ref(), "Gender", form.gender, &mut unmatched);
    form.ethnicity = resolve_labeled(
        draft.ethnicity.as_ref(),
        "Ethnicity",
        form.ethnicity,
        &mut unmatched,
    );
    form.eye_color = resolve_labeled(
        draft.eye_color.as_ref(),
        "Eye Color",
        form.eye_color,
        &mut unmatched,
    );
    form.hair_color = resolve_labeled(
        draft.hair_color.as_ref(),
        "Hair Color",
        form.hair_color,
        &mut unmatched,
    );
    form.breast_type = resolve_labeled(
        draft.breast_type.as_ref(),
        "Breast Type",
        form.breast_type,
        &mut unmatched,
    );

    if let Some(text) = present(draft.birthdate.as_ref()) {
        match FuzzyDate::parse(text) {
            Ok(date) => form.birthdate = Some(date.format()),
            Err(_) => unmatched.insert("Birthdate", text),
        }
    }

    if let Some(text) = present(draft.height.as_ref()) {
        match text.parse::<i32>() {
            Ok(height) if height > 0 => form.height = Some(height),
            _ => unmatched.insert("Height", text),
        }
    }

    if let Some(text) = present(draft.country.as_ref()) {
        if text.len() == 2 && text.chars().all(|c| c.is_ascii_alphabetic()) {
            form.country = Some(text.to_ascii_uppercase());
        } else {
            unmatched.insert("Country", text);
        }
    }

    if let Some(text) = present(draft.measurements.as_ref()) {
        match parse_measurements(text) {
            Some(m) => {
                form.bra_size = m.bra_size();
                form.waist_size = m.waist;
                form.hip_size = m.hip;
            }
            None => unmatched.insert("Measurements", text),
        }
    }

    // Free-text body modifications cannot be split into location/description.
    if let Some(text) = present(draft.tattoos.as_ref()) {
        unmatched.insert("Tattoos", text);
    }
    if let Some(text) = present(draft.piercings.as_ref()) {
        unmatched.insert("Piercings", text);
    }

    debug!(
        name = %form.name,
        unmatched = unmatched.len(),
        "reconciled performer draft"
    );
    (form, unmatched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbx_types::{EntityId, EyeColor, Gender, HairColor, Site};

    fn site(id: u128) -> Site {
        Site {
            id: EntityId::from_u128(id),
            name: format!("Site {id}"),
        }
    }

    #[test]
    fn enum_text_resolves_by_value_or_label() {
        let draft = PerformerDraft {
            name: "Jane".into(),
            gender: Some("female".into()),
            hair_color: Some("Brown".into()),
            eye_color: Some("HAZEL".into()),
            ..Default::default()
        };
        let (form, unmatched) = reconcile_performer(&draft, None);
        assert_eq!(form.gender, Some(Gender::Female));
        assert_eq!(form.hair_color, Some(HairColor::Brunette));
        assert_eq!(form.eye_color, Some(EyeColor::Hazel));
        assert!(unmatched.is_empty());
    }

    #[test]
    fn unknown_enum_text_is_unmatched_verbatim() {
        let draft = PerformerDraft {
            name: "Jane".into(),
            hair_color: Some("Strawberry".into()),
            ..Default::default()
        };
        let (form, unmatched) = reconcile_performer(&draft, None);
        assert_eq!(form.hair_color, None);
        assert_eq!(unmatched.get("Hair Color"), Some("Strawberry"));
    }

    #[test]
    fn measurements_are_split() {
        let draft = PerformerDraft {
            measurements: Some("34c-24-36".into()),
            ..Default::default()
        };
        let (form, unmatched) = reconcile_performer(&draft, None);
        assert_eq!(form.bra_size.as_deref(), Some("34C"));
        assert_eq!(form.waist_size, Some(24));
        assert_eq!(form.hip_size, Some(36));
        assert!(unmatched.is_empty());
    }

    #[test]
    fn malformed_measurements_are_unmatched() {
        let draft = PerformerDraft {
            measurements: Some("34/24/36".into()),
            ..Default::default()
        };
        let (form, unmatched) = reconcile_performer(&draft, None);
        assert_eq!(form.bra_size, None);
        assert_eq!(form.waist_size, None);
        assert_eq!(form.hip_size, None);
        assert_eq!(unmatched.get("Measurements"), Some("34/24/36"));
    }

    #[test]
    fn height_country_and_birthdate_validation() {
        let draft = PerformerDraft {
            height: Some("5'7\"".into()),
            country: Some("United States".into()),
            birthdate: Some("May 1990".into()),
            ..Default::default()
        };
        let (form, unmatched) = reconcile_performer(&draft, None);
        assert_eq!(form.height, None);
        assert_eq!(form.country, None);
        assert_eq!(form.birthdate, None);
        assert_eq!(unmatched.get("Height"), Some("5'7\""));
        assert_eq!(unmatched.get("Country"), Some("United States"));
        assert_eq!(unmatched.get("Birthdate"), Some("May 1990"));

        let draft = PerformerDraft {
            height: Some("170".into()),
            country: Some("us".into()),
            birthdate: Some("1990-05".into()),
            ..Default::default()
        };
        let (form, unmatched) = reconcile_performer(&draft, None);
        assert_eq!(form.height, Some(170));
        assert_eq!(form.country.as_deref(), Some("US"));
        assert_eq!(form.birthdate.as_deref(), Some("1990-05"));
        assert!(unmatched.is_empty());
    }

    #[test]
    fn draft_url_wins_over_existing_duplicate() {
        let existing = Performer {
            id: EntityId::from_u128(1),
            name: "Jane".into(),
            urls: vec![
                Url::new("https://a.example/jane", site(1)),
                Url::new("https://b.example/jane", site(2)),
            ],
            ..Default::default()
        };
        let draft = PerformerDraft {
            id: Some(existing.id),
            urls: vec![
                Url::new("https://b.example/jane", site(2)),
                Url::new("https://b.example/jane", site(3)),
            ],
            ..Default::default()
        };

        let (form, _) = reconcile_performer(&draft, Some(&existing));
        let keys: Vec<String> = form.urls.iter().map(draft_url_key).collect();
        assert_eq!(
            keys,
            vec![
                draft_url_key(&draft.urls[0]),
                draft_url_key(&draft.urls[1]),
                draft_url_key(&existing.urls[0]),
            ]
        );
    }

    #[test]
    fn draft_copy_of_shared_url_keeps_its_attributes() {
        let stale = Site {
            id: EntityId::from_u128(7),
            name: "Old Site Name".into(),
        };
        let fresh = Site {
            id: EntityId::from_u128(7),
            name: "New Site Name".into(),
        };
        let existing = Performer {
            urls: vec![Url::new("https://c.example/jane", stale)],
            ..Default::default()
        };
        let draft = PerformerDraft {
            urls: vec![Url::new("https://c.example/jane", fresh)],
            ..Default::default()
        };

        let (form, _) = reconcile_performer(&draft, Some(&existing));
        assert_eq!(form.urls.len(), 1);
        assert_eq!(form.urls[0].site.name, "New Site Name");
    }

    #[test]
    fn absent_draft_values_keep_existing() {
        let existing = Performer {
            name: "Jane".into(),
            aliases: vec!["JD".into()],
            country: Some("US".into()),
            ..Default::default()
        };
        let draft = PerformerDraft {
            aliases: vec![" Janie ".into(), "JD".into()],
            ..Default::default()
        };
        let (form, _) = reconcile_performer(&draft, Some(&existing));
        assert_eq!(form.name, "Jane");
        assert_eq!(form.country.as_deref(), Some("US"));
        assert_eq!(form.aliases, vec!["Janie".to_string(), "JD".to_string()]);
    }

    #[test]
    fn free_text_body_modifications_are_unmatched() {
        let draft = PerformerDraft {
            tattoos: Some("Rose on left arm".into()),
            piercings: Some("Navel".into()),
            ..Default::default()
        };
        let (form, unmatched) = reconcile_performer(&draft, None);
        assert!(form.tattoos.is_empty());
        assert_eq!(unmatched.get("Tattoos"), Some("Rose on left arm"));
        assert_eq!(unmatched.get("Piercings"), Some("Navel"));
    }
}
