//! Identity keys for relationship members, and helpers shared by the
//! per-entity engines.

use sbx_types::{BodyModification, Fingerprint, Image, Labeled, PerformerAppearance, TagRef, Url};

use crate::value::{diff_link, diff_value, Link, Presence};

#[allow(clippy::ptr_arg)]
pub fn alias_key(alias: &String) -> String {
    alias.clone()
}

/// `"{site}: {url}"`, with `Unknown` for an unnamed site.
pub fn url_key(url: &Url) -> String {
    let site = if url.site.name.is_empty() {
        "Unknown"
    } else {
        url.site.name.as_str()
    };
    format!("{site}: {}", url.url)
}

pub fn image_key(image: &Image) -> String {
    image.id.to_string()
}

pub fn body_modification_key(modification: &BodyModification) -> String {
    format!(
        "{}|{}",
        modification.location,
        modification.description.as_deref().unwrap_or_default()
    )
}

/// Performer id plus credited name: re-crediting a performer is a change.
pub fn appearance_key(appearance: &PerformerAppearance) -> String {
    format!(
        "{}{}",
        appearance.performer.id,
        appearance.as_name.as_deref().unwrap_or_default()
    )
}

pub fn tag_key(tag: &TagRef) -> String {
    tag.id.to_string()
}

pub fn fingerprint_key(fingerprint: &Fingerprint) -> String {
    format!("{}{}", fingerprint.hash, fingerprint.algorithm.as_str())
}

/// Diff one scalar in both directions: `(old side, new side)`.
pub(crate) fn scalar_pair<T>(old: Option<&T>, new: Option<&T>) -> (Option<T>, Option<T>)
where
    T: Presence + PartialEq + Clone,
{
    (diff_value(new, old), diff_value(old, new))
}

/// Diff one link in both directions: `(old side, new side)`.
pub(crate) fn link_pair<L: Link>(old: Option<&L>, new: Option<&L>) -> (Option<L>, Option<L>) {
    (diff_link(new, old), diff_link(old, new))
}

/// Images with a URL; blank entries are form slots the reviewer left empty.
pub(crate) fn usable_images(images: &[Image]) -> Vec<Image> {
    images.iter().filter(|i| !i.url.is_empty()).cloned().collect()
}

/// Body modifications with a location.
pub(crate) fn usable_modifications(mods: &[BodyModification]) -> Vec<BodyModification> {
    mods.iter()
        .filter(|m| !m.location.trim().is_empty())
        .cloned()
        .collect()
}
