//! Tag diff engine.

use sbx_types::Tag;

use crate::details::{TagDetails, TagFields};
use crate::forms::TagForm;
use crate::keys::{alias_key, link_pair, scalar_pair};
use crate::set_diff::diff_keyed;

/// Diff a tag form against the current tag, if any.
pub fn diff_tag(form: &TagForm, original: Option<&Tag>) -> (TagFields, TagDetails) {
    let mut old = TagFields::default();
    let mut new = TagDetails::default();

    (old.name, new.fields.name) = scalar_pair(original.map(|t| &t.name), Some(&form.name));
    (old.description, new.fields.description) = scalar_pair(
        original.and_then(|t| t.description.as_ref()),
        form.description.as_ref(),
    );
    (old.category, new.fields.category) =
        link_pair(original.and_then(|t| t.category.as_ref()), form.category.as_ref());

    (new.added_aliases, new.removed_aliases) = diff_keyed(
        original.map_or(&[][..], |t| t.aliases.as_slice()),
        &form.aliases,
        alias_key,
    )
    .into_parts();

    (old, new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbx_types::{CategoryRef, EntityId};

    #[test]
    fn dangling_category_is_not_reported() {
        let tag = Tag {
            id: EntityId::from_u128(3),
            name: "Outdoor".into(),
            ..Default::default()
        };
        let mut form = TagForm::from_tag(&tag);
        form.category = Some(CategoryRef {
            id: EntityId::from_u128(4),
            name: String::new(),
        });

        let (old, new) = diff_tag(&form, Some(&tag));
        assert_eq!(old, TagFields::default());
        assert_eq!(new, TagDetails::default());
    }

    #[test]
    fn empty_description_is_absent() {
        let tag = Tag {
            name: "Outdoor".into(),
            description: Some(String::new()),
            ..Default::default()
        };
        let mut form = TagForm::from_tag(&tag);
        form.description = None;

        let (old, new) = diff_tag(&form, Some(&tag));
        assert_eq!(old.description, None);
        assert_eq!(new.fields.description, None);
    }
}
