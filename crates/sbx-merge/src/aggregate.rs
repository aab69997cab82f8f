//! Fold merge sources into alias and image candidates for the target.

use serde::{Deserialize, Serialize};

use sbx_types::{EntityId, Image, Performer, Studio, Tag};

/// An entity that can take part in a merge.
pub trait Mergeable {
    fn merge_id(&self) -> EntityId;
    fn merge_name(&self) -> &str;
    fn merge_aliases(&self) -> &[String];

    /// Images carried over from a source. Kinds without images return
    /// nothing.
    fn merge_images(&self) -> &[Image] {
        &[]
    }
}

impl Mergeable for Performer {
    fn merge_id(&self) -> EntityId {
        self.id
    }

    fn merge_name(&self) -> &str {
        &self.name
    }

    fn merge_aliases(&self) -> &[String] {
        &self.aliases
    }

    fn merge_images(&self) -> &[Image] {
        &self.images
    }
}

impl Mergeable for Studio {
    fn merge_id(&self) -> EntityId {
        self.id
    }

    fn merge_name(&self) -> &str {
        &self.name
    }

    fn merge_aliases(&self) -> &[String] {
        &self.aliases
    }

    fn merge_images(&self) -> &[Image] {
        &self.images
    }
}

impl Mergeable for Tag {
    fn merge_id(&self) -> EntityId {
        self.id
    }

    fn merge_name(&self) -> &str {
        &self.name
    }

    fn merge_aliases(&self) -> &[String] {
        &self.aliases
    }
}

/// What the sources contribute to the target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeCandidates {
    /// Source names, then source aliases, trimmed. Never blank and never
    /// equal to the target's name.
    pub alias_candidates: Vec<String>,
    /// Every source image, in source order. Not deduplicated.
    pub image_candidates: Vec<Image>,
}

pub fn aggregate<T: Mergeable>(target: &T, sources: &[T]) -> MergeCandidates {
    let target_name = target.merge_name().trim();

    let names = sources.iter().map(|s| s.merge_name());
    let aliases = sources
        .iter()
        .flat_map(|s| s.merge_aliases().iter().map(String::as_str));
    let alias_candidates = names
        .chain(aliases)
        .map(str::trim)
        .filter(|a| !a.is_empty() && *a != target_name)
        .map(str::to_string)
        .collect();

    let image_candidates = sources
        .iter()
        .flat_map(|s| s.merge_images().iter().cloned())
        .collect();

    MergeCandidates {
        alias_candidates,
        image_candidates,
    }
}

/// Default for "record source names as performance aliases": on only when
/// the target's name differs from the name of every source.
pub fn default_set_merge_aliases<T: Mergeable>(target: &T, sources: &[T]) -> bool {
    let target_name = target.merge_name().trim();
    sources
        .iter()
        .all(|s| s.merge_name().trim() != target_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn performer(id: u128, name: &str, aliases: &[&str]) -> Performer {
        Performer {
            id: EntityId::from_u128(id),
            name: name.into(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn candidates_exclude_target_name() {
        let target = performer(1, "Jane Doe", &[]);
        let sources = [
            performer(2, " Jane Doe ", &["JD", "Jane Doe"]),
            performer(3, "Janie", &["  ", "J. Doe"]),
        ];
        let candidates = aggregate(&target, &sources);
        assert_eq!(candidates.alias_candidates, vec!["Janie", "JD", "J. Doe"]);
    }

    #[test]
    fn images_are_flattened_without_dedup() {
        let image = Image {
            id: EntityId::from_u128(9),
            url: "https://img.example/9.jpg".into(),
            width: 100,
            height: 100,
        };
        let target = performer(1, "Jane", &[]);
        let mut a = performer(2, "A", &[]);
        let mut b = performer(3, "B", &[]);
        a.images.push(image.clone());
        b.images.push(image);
        assert_eq!(aggregate(&target, &[a, b]).image_candidates.len(), 2);
    }

    #[test]
    fn tags_have_no_image_candidates() {
        let target = Tag {
            name: "Outdoor".into(),
            ..Default::default()
        };
        let source = Tag {
            name: "Outdoors".into(),
            aliases: vec!["Outside".into()],
            ..Default::default()
        };
        let candidates = aggregate(&target, &[source]);
        assert_eq!(candidates.alias_candidates, vec!["Outdoors", "Outside"]);
        assert!(candidates.image_candidates.is_empty());
    }

    #[test]
    fn default_off_when_all_names_match() {
        let target = performer(1, "Jane", &[]);
        let sources = [performer(2, "Jane", &[]), performer(3, "Jane ", &[])];
        assert!(!default_set_merge_aliases(&target, &sources));
    }

    #[test]
    fn default_on_when_all_names_differ() {
        let target = performer(1, "Jane", &[]);
        let sources = [performer(2, "Jayne", &[]), performer(3, "J. Doe", &[])];
        assert!(default_set_merge_aliases(&target, &sources));
    }

    #[test]
    fn default_off_when_any_name_matches() {
        let target = performer(1, "Jane", &[]);
        let sources = [performer(2, "Jane", &[]), performer(3, "Jayne", &[])];
        assert!(!default_set_merge_aliases(&target, &sources));
    }

    proptest! {
        #[test]
        fn candidates_never_blank_or_target(
            target in "[a-c ]{0,4}",
            names in prop::collection::vec("[a-c ]{0,4}", 1..5),
        ) {
            let target = performer(0, &target, &[]);
            let sources: Vec<Performer> = names
                .iter()
                .enumerate()
                .map(|(i, n)| performer(i as u128 + 1, n, &[n.as_str()]))
                .collect();
            let trimmed = target.name.trim().to_string();
            for alias in aggregate(&target, &sources).alias_candidates {
                prop_assert!(!alias.is_empty());
                prop_assert_ne!(alias, trimmed.clone());
            }
        }
    }
}
