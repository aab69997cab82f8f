//! Studio diff engine.

use sbx_types::Studio;

use crate::details::{StudioDetails, StudioFields};
use crate::forms::StudioForm;
use crate::keys::{alias_key, image_key, link_pair, scalar_pair, url_key, usable_images};
use crate::set_diff::diff_keyed;

/// Diff a studio form against the current studio, if any.
pub fn diff_studio(form: &StudioForm, original: Option<&Studio>) -> (StudioFields, StudioDetails) {
    let mut old = StudioFields::default();
    let mut new = StudioDetails::default();

    (old.name, new.fields.name) = scalar_pair(original.map(|s| &s.name), Some(&form.name));
    (old.parent, new.fields.parent) =
        link_pair(original.and_then(|s| s.parent.as_ref()), form.parent.as_ref());

    (new.added_aliases, new.removed_aliases) = diff_keyed(
        original.map_or(&[][..], |s| s.aliases.as_slice()),
        &form.aliases,
        alias_key,
    )
    .into_parts();
    (new.added_urls, new.removed_urls) = diff_keyed(
        original.map_or(&[][..], |s| s.urls.as_slice()),
        &form.urls,
        url_key,
    )
    .into_parts();
    (new.added_images, new.removed_images) = diff_keyed(
        original.map_or(&[][..], |s| s.images.as_slice()),
        &usable_images(&form.images),
        image_key,
    )
    .into_parts();

    (old, new)
}
