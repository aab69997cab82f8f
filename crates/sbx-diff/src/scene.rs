//! Scene diff engine.

use sbx_types::{format_fuzzy_date, parse_duration, PerformerAppearance, Scene, TagRef};

use crate::details::{SceneDetails, SceneFields};
use crate::forms::SceneForm;
use crate::keys::{
    appearance_key, fingerprint_key, image_key, link_pair, scalar_pair, tag_key, url_key,
    usable_images,
};
use crate::set_diff::diff_keyed;

/// Diff a scene form against the current scene, if any.
pub fn diff_scene(form: &SceneForm, original: Option<&Scene>) -> (SceneFields, SceneDetails) {
    let mut old = SceneFields::default();
    let mut new = SceneDetails::default();

    (old.title, new.fields.title) =
        scalar_pair(original.and_then(|s| s.title.as_ref()), form.title.as_ref());
    (old.details, new.fields.details) =
        scalar_pair(original.and_then(|s| s.details.as_ref()), form.details.as_ref());

    let date = original.and_then(|s| format_fuzzy_date(s.date.as_ref()));
    (old.date, new.fields.date) = scalar_pair(date.as_ref(), form.date.as_ref());

    let duration = form.duration.as_deref().and_then(parse_duration);
    (old.duration, new.fields.duration) =
        scalar_pair(original.and_then(|s| s.duration.as_ref()), duration.as_ref());

    (old.director, new.fields.director) = scalar_pair(
        original.and_then(|s| s.director.as_ref()),
        form.director.as_ref(),
    );
    (old.code, new.fields.code) =
        scalar_pair(original.and_then(|s| s.code.as_ref()), form.code.as_ref());
    (old.studio, new.fields.studio) =
        link_pair(original.and_then(|s| s.studio.as_ref()), form.studio.as_ref());

    let performers: Vec<PerformerAppearance> = form
        .performers
        .iter()
        .filter_map(|slot| slot.to_appearance())
        .collect();
    let tags: Vec<TagRef> = form
        .tags
        .iter()
        .filter(|t| !t.id.as_uuid().is_nil() && !t.name.is_empty())
        .cloned()
        .collect();

    (new.added_urls, new.removed_urls) = diff_keyed(
        original.map_or(&[][..], |s| s.urls.as_slice()),
        &form.urls,
        url_key,
    )
    .into_parts();
    (new.added_performers, new.removed_performers) = diff_keyed(
        original.map_or(&[][..], |s| s.performers.as_slice()),
        &performers,
        appearance_key,
    )
    .into_parts();
    (new.added_tags, new.removed_tags) = diff_keyed(
        original.map_or(&[][..], |s| s.tags.as_slice()),
        &tags,
        tag_key,
    )
    .into_parts();
    (new.added_images, new.removed_images) = diff_keyed(
        original.map_or(&[][..], |s| s.images.as_slice()),
        &usable_images(&form.images),
        image_key,
    )
    .into_parts();
    (new.added_fingerprints, new.removed_fingerprints) = diff_keyed(
        original.map_or(&[][..], |s| s.fingerprints.as_slice()),
        &form.fingerprints,
        fingerprint_key,
    )
    .into_parts();

    (old, new)
}
