//! A validated merge target with its sources, and the initial merge form.

use std::collections::HashSet;

use tracing::debug;

use sbx_diff::{PerformerForm, StudioForm, TagForm};
use sbx_types::{EntityId, Image, Performer, Studio, Tag};

use crate::aggregate::{aggregate, default_set_merge_aliases, MergeCandidates, Mergeable};
use crate::error::{MergeError, MergeResult};

/// One target and the sources it absorbs. Only lives while a merge form is
/// being prepared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeSet<T> {
    target: T,
    sources: Vec<T>,
}

impl<T: Mergeable> MergeSet<T> {
    pub fn new(target: T, sources: Vec<T>) -> MergeResult<Self> {
        if sources.is_empty() {
            return Err(MergeError::NoSources);
        }
        let target_id = target.merge_id();
        let mut seen = HashSet::new();
        for source in &sources {
            let id = source.merge_id();
            if id == target_id {
                return Err(MergeError::SourceIsTarget(id));
            }
            if !seen.insert(id) {
                return Err(MergeError::DuplicateSource(id));
            }
        }
        Ok(Self { target, sources })
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn sources(&self) -> &[T] {
        &self.sources
    }

    pub fn source_ids(&self) -> Vec<EntityId> {
        self.sources.iter().map(Mergeable::merge_id).collect()
    }

    pub fn candidates(&self) -> MergeCandidates {
        let candidates = aggregate(&self.target, &self.sources);
        debug!(
            target = %self.target.merge_id(),
            sources = self.sources.len(),
            aliases = candidates.alias_candidates.len(),
            images = candidates.image_candidates.len(),
            "aggregated merge candidates"
        );
        candidates
    }

    pub fn default_set_merge_aliases(&self) -> bool {
        default_set_merge_aliases(&self.target, &self.sources)
    }

    /// Target aliases followed by the candidates, without repeats.
    fn merged_aliases(&self, candidates: &MergeCandidates) -> Vec<String> {
        let mut seen = HashSet::new();
        self.target
            .merge_aliases()
            .iter()
            .chain(&candidates.alias_candidates)
            .filter(|a| seen.insert(a.as_str()))
            .cloned()
            .collect()
    }

    /// Target images followed by candidate images, first of each id kept.
    fn merged_images(&self, candidates: &MergeCandidates) -> Vec<Image> {
        let mut seen = HashSet::new();
        self.target
            .merge_images()
            .iter()
            .chain(&candidates.image_candidates)
            .filter(|i| seen.insert(i.id))
            .cloned()
            .collect()
    }
}

impl MergeSet<Performer> {
    /// The form a reviewer starts from: the target, plus every source name
    /// and alias as an alias and every source image.
    pub fn seed_performer_form(&self) -> PerformerForm {
        let candidates = self.candidates();
        let mut form = PerformerForm::from_performer(&self.target);
        form.aliases = self.merged_aliases(&candidates);
        form.images = self.merged_images(&candidates);
        form
    }
}

impl MergeSet<Studio> {
    pub fn seed_studio_form(&self) -> StudioForm {
        let candidates = self.candidates();
        let mut form = StudioForm::from_studio(&self.target);
        form.aliases = self.merged_aliases(&candidates);
        form.images = self.merged_images(&candidates);
        form
    }
}

impl MergeSet<Tag> {
    pub fn seed_tag_form(&self) -> TagForm {
        let candidates = self.candidates();
        let mut form = TagForm::from_tag(&self.target);
        form.aliases = self.merged_aliases(&candidates);
        form
    }
}
