//! Performer diff engine.

use sbx_types::{format_fuzzy_date, parse_bra_size, Performer};

use crate::details::{PerformerDetails, PerformerFields};
use crate::forms::PerformerForm;
use crate::keys::{
    alias_key, body_modification_key, image_key, scalar_pair, url_key, usable_images,
    usable_modifications,
};
use crate::set_diff::diff_keyed;

/// Diff a performer form against the current performer, if any.
///
/// Returns the old and new halves of the edit. With no original every
/// present form value is reported as new.
pub fn diff_performer(
    form: &PerformerForm,
    original: Option<&Performer>,
) -> (PerformerFields, PerformerDetails) {
    let mut old = PerformerFields::default();
    let mut new = PerformerDetails::default();

    (old.name, new.fields.name) = scalar_pair(original.map(|p| &p.name), Some(&form.name));
    (old.disambiguation, new.fields.disambiguation) = scalar_pair(
        original.and_then(|p| p.disambiguation.as_ref()),
        form.disambiguation.as_ref(),
    );
    (old.gender, new.fields.gender) =
        scalar_pair(original.and_then(|p| p.gender.as_ref()), form.gender.as_ref());

    let birthdate = original.and_then(|p| format_fuzzy_date(p.birthdate.as_ref()));
    (old.birthdate, new.fields.birthdate) =
        scalar_pair(birthdate.as_ref(), form.birthdate.as_ref());

    (old.career_start_year, new.fields.career_start_year) = scalar_pair(
        original.and_then(|p| p.career_start_year.as_ref()),
        form.career_start_year.as_ref(),
    );
    (old.career_end_year, new.fields.career_end_year) = scalar_pair(
        original.and_then(|p| p.career_end_year.as_ref()),
        form.career_end_year.as_ref(),
    );
    (old.height, new.fields.height) =
        scalar_pair(original.and_then(|p| p.height.as_ref()), form.height.as_ref());

    let (band_size, cup_size) = form
        .bra_size
        .as_deref()
        .map(parse_bra_size)
        .unwrap_or_default();
    let measurements = original.map(|p| &p.measurements);
    (old.band_size, new.fields.band_size) = scalar_pair(
        measurements.and_then(|m| m.band_size.as_ref()),
        band_size.as_ref(),
    );
    (old.cup_size, new.fields.cup_size) = scalar_pair(
        measurements.and_then(|m| m.cup_size.as_ref()),
        cup_size.as_ref(),
    );
    (old.waist_size, new.fields.waist_size) = scalar_pair(
        measurements.and_then(|m| m.waist.as_ref()),
        form.waist_size.as_ref(),
    );
    (old.hip_size, new.fields.hip_size) = scalar_pair(
        measurements.and_then(|m| m.hip.as_ref()),
        form.hip_size.as_ref(),
    );

    (old.breast_type, new.fields.breast_type) = scalar_pair(
        original.and_then(|p| p.breast_type.as_ref()),
        form.breast_type.as_ref(),
    );
    (old.country, new.fields.country) =
        scalar_pair(original.and_then(|p| p.country.as_ref()), form.country.as_ref());
    (old.ethnicity, new.fields.ethnicity) = scalar_pair(
        original.and_then(|p| p.ethnicity.as_ref()),
        form.ethnicity.as_ref(),
    );
    (old.eye_color, new.fields.eye_color) = scalar_pair(
        original.and_then(|p| p.eye_color.as_ref()),
        form.eye_color.as_ref(),
    );
    (old.hair_color, new.fields.hair_color) = scalar_pair(
        original.and_then(|p| p.hair_color.as_ref()),
        form.hair_color.as_ref(),
    );

    (new.added_aliases, new.removed_aliases) = diff_keyed(
        original.map_or(&[][..], |p| p.aliases.as_slice()),
        &form.aliases,
        alias_key,
    )
    .into_parts();
    (new.added_urls, new.removed_urls) = diff_keyed(
        original.map_or(&[][..], |p| p.urls.as_slice()),
        &form.urls,
        url_key,
    )
    .into_parts();
    (new.added_images, new.removed_images) = diff_keyed(
        original.map_or(&[][..], |p| p.images.as_slice()),
        &usable_images(&form.images),
        image_key,
    )
    .into_parts();
    (new.added_tattoos, new.removed_tattoos) = diff_keyed(
        original.map_or(&[][..], |p| p.tattoos.as_slice()),
        &usable_modifications(&form.tattoos),
        body_modification_key,
    )
    .into_parts();
    (new.added_piercings, new.removed_piercings) = diff_keyed(
        original.map_or(&[][..], |p| p.piercings.as_slice()),
        &usable_modifications(&form.piercings),
        body_modification_key,
    )
    .into_parts();

    (old, new)
}
