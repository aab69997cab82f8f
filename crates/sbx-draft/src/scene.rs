//! Seed a scene form from a draft.

use tracing::debug;

use sbx_diff::{keys::fingerprint_key, SceneForm, ScenePerformerInput};
use sbx_types::{format_duration, FuzzyDate, Scene, TagRef};

use crate::draft::{DraftEntity, SceneDraft};
use crate::performer::{draft_url_key, image_id, present};
use crate::unmatched::{prepend_unique, UnmatchedFields};

/// Names of the unresolved slots, joined for display.
fn unresolved_names<T>(slots: &[DraftEntity<T>]) -> String {
    slots
        .iter()
        .filter_map(DraftEntity::unresolved_name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn performer_slot_key(slot: &ScenePerformerInput) -> Option<sbx_types::EntityId> {
    slot.performer.as_ref().map(|p| p.id)
}

/// Merge `draft` into the form for `existing` (or an empty form).
///
/// Resolved references are seeded into the form; unresolved names are
/// listed in the unmatched fields instead.
pub fn reconcile_scene(draft: &SceneDraft, existing: Option<&Scene>) -> (SceneForm, UnmatchedFields) {
    let mut form = existing.map(SceneForm::from_scene).unwrap_or_default();
    let mut unmatched = UnmatchedFields::new();

    if let Some(title) = present(draft.title.as_ref()) {
        form.title = Some(title.to_string());
    }
    if let Some(details) = present(draft.details.as_ref()) {
        form.details = Some(details.to_string());
    }
    if let Some(text) = present(draft.date.as_ref()) {
        match FuzzyDate::parse(text) {
            Ok(date) => form.date = Some(date.format()),
            Err(_) => unmatched.insert("Date", text),
        }
    }

    if let Some(url) = &draft.url {
        form.urls = prepend_unique(std::slice::from_ref(url), &form.urls, draft_url_key);
    }
    if let Some(image) = &draft.image {
        form.images = prepend_unique(std::slice::from_ref(image), &form.images, image_id);
    }

    match &draft.studio {
        Some(DraftEntity::Resolved(studio)) => form.studio = Some(studio.clone()),
        Some(DraftEntity::Unresolved { name }) => unmatched.insert("Studio", name.as_str()),
        None => {}
    }

    let performers: Vec<ScenePerformerInput> = draft
        .performers
        .iter()
        .filter_map(DraftEntity::resolved)
        .map(|performer| ScenePerformerInput {
            performer: Some(performer.clone()),
            as_name: None,
        })
        .collect();
    form.performers = prepend_unique(&performers, &form.performers, performer_slot_key);
    unmatched.insert("Performers", unresolved_names(&draft.performers));

    let tags: Vec<TagRef> = draft
        .tags
        .iter()
        .filter_map(DraftEntity::resolved)
        .cloned()
        .collect();
    form.tags = prepend_unique(&tags, &form.tags, |t| t.id);
    unmatched.insert("Tags", unresolved_names(&draft.tags));

    form.fingerprints = prepend_unique(&draft.fingerprints, &form.fingerprints, fingerprint_key);

    if form.duration.is_none() {
        form.duration = draft
            .fingerprints
            .first()
            .map(|fp| fp.duration)
            .filter(|d| *d > 0)
            .map(format_duration);
    }

    debug!(
        title = form.title.as_deref().unwrap_or_default(),
        unmatched = unmatched.len(),
        "reconciled scene draft"
    );
    (form, unmatched)
}
