//! Change sets: edit details normalized into an ordered list of display
//! fields, ready for a renderer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sbx_types::Labeled;

use crate::details::{
    EditDetails, OldEditDetails, PerformerDetails, PerformerFields, SceneDetails, SceneFields,
    StudioDetails, StudioFields, TagDetails, TagFields,
};
use crate::error::{DiffError, DiffResult};

/// How one display field changed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldChange {
    /// A single value. `show_diff` is false when there is no prior entity,
    /// in which case only `new` is meaningful.
    Scalar {
        old: Option<Value>,
        new: Option<Value>,
        show_diff: bool,
    },
    /// Members added to and removed from a collection.
    Set { added: Vec<Value>, removed: Vec<Value> },
}

/// A named field in a change set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub field: String,
    pub change: FieldChange,
}

/// Ordered field name to change mapping. Only changed fields appear.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet {
    entries: Vec<FieldEntry>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize an old/new detail pair. A missing old side is treated as
    /// "nothing set" (a CREATE).
    pub fn from_details(
        old: Option<&OldEditDetails>,
        new: &EditDetails,
        show_diff: bool,
    ) -> DiffResult<Self> {
        let mismatch = |old: &OldEditDetails| DiffError::KindMismatch {
            form: new.target_type(),
            original: old.target_type(),
        };
        let mut builder = ChangeSetBuilder::new(show_diff);

        match new {
            EditDetails::Performer(new) => {
                let old = match old {
                    None => PerformerFields::default(),
                    Some(OldEditDetails::Performer(old)) => old.clone(),
                    Some(other) => return Err(mismatch(other)),
                };
                builder.performer(&old, new)?;
            }
            EditDetails::Scene(new) => {
                let old = match old {
                    None => SceneFields::default(),
                    Some(OldEditDetails::Scene(old)) => old.clone(),
                    Some(other) => return Err(mismatch(other)),
                };
                builder.scene(&old, new)?;
            }
            EditDetails::Studio(new) => {
                let old = match old {
                    None => StudioFields::default(),
                    Some(OldEditDetails::Studio(old)) => old.clone(),
                    Some(other) => return Err(mismatch(other)),
                };
                builder.studio(&old, new)?;
            }
            EditDetails::Tag(new) => {
                let old = match old {
                    None => TagFields::default(),
                    Some(OldEditDetails::Tag(old)) => old.clone(),
                    Some(other) => return Err(mismatch(other)),
                };
                builder.tag(&old, new)?;
            }
        }

        Ok(builder.finish())
    }

    pub fn get(&self, field: &str) -> Option<&FieldChange> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| &e.change)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry> {
        self.entries.iter()
    }

    /// Display names of the changed fields, in order.
    pub fn fields(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.field.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a FieldEntry;
    type IntoIter = std::slice::Iter<'a, FieldEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

struct ChangeSetBuilder {
    show_diff: bool,
    entries: Vec<FieldEntry>,
}

impl ChangeSetBuilder {
    fn new(show_diff: bool) -> Self {
        Self {
            show_diff,
            entries: Vec::new(),
        }
    }

    fn scalar<T: Serialize>(
        &mut self,
        field: &str,
        old: Option<T>,
        new: Option<T>,
    ) -> DiffResult<&mut Self> {
        if old.is_none() && new.is_none() {
            return Ok(self);
        }
        let old = old.map(serde_json::to_value).transpose()?;
        let new = new.map(serde_json::to_value).transpose()?;
        self.entries.push(FieldEntry {
            field: field.to_string(),
            change: FieldChange::Scalar {
                old,
                new,
                show_diff: self.show_diff,
            },
        });
        Ok(self)
    }

    fn set<T: Serialize>(&mut self, field: &str, added: &[T], removed: &[T]) -> DiffResult<&mut Self> {
        if added.is_empty() && removed.is_empty() {
            return Ok(self);
        }
        let added = added
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        let removed = removed
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.entries.push(FieldEntry {
            field: field.to_string(),
            change: FieldChange::Set { added, removed },
        });
        Ok(self)
    }

    fn performer(&mut self, old: &PerformerFields, new: &PerformerDetails) -> DiffResult<()> {
        let fields = &new.fields;
        self.scalar("Name", old.name.as_ref(), fields.name.as_ref())?
            .scalar(
                "Disambiguation",
                old.disambiguation.as_ref(),
                fields.disambiguation.as_ref(),
            )?
            .set("Aliases", &new.added_aliases, &new.removed_aliases)?
            .scalar(
                "Gender",
                old.gender.map(|g| g.label()),
                fields.gender.map(|g| g.label()),
            )?
            .scalar("Birthdate", old.birthdate.as_ref(), fields.birthdate.as_ref())?
            .scalar(
                "Career Start",
                old.career_start_year,
                fields.career_start_year,
            )?
            .scalar("Career End", old.career_end_year, fields.career_end_year)?
            .scalar("Height", old.height, fields.height)?
            .scalar(
                "Breast Type",
                old.breast_type.map(|b| b.label()),
                fields.breast_type.map(|b| b.label()),
            )?
            .scalar("Band Size", old.band_size, fields.band_size)?
            .scalar("Cup Size", old.cup_size.as_ref(), fields.cup_size.as_ref())?
            .scalar("Waist Size", old.waist_size, fields.waist_size)?
            .scalar("Hip Size", old.hip_size, fields.hip_size)?
            .scalar("Country", old.country.as_ref(), fields.country.as_ref())?
            .scalar(
                "Ethnicity",
                old.ethnicity.map(|e| e.label()),
                fields.ethnicity.map(|e| e.label()),
            )?
            .scalar(
                "Eye Color",
                old.eye_color.map(|e| e.label()),
                fields.eye_color.map(|e| e.label()),
            )?
            .scalar(
                "Hair Color",
                old.hair_color.map(|h| h.label()),
                fields.hair_color.map(|h| h.label()),
            )?
            .set("Tattoos", &new.added_tattoos, &new.removed_tattoos)?
            .set("Piercings", &new.added_piercings, &new.removed_piercings)?
            .set("URLs", &new.added_urls, &new.removed_urls)?
            .set("Images", &new.added_images, &new.removed_images)?;
        Ok(())
    }

    fn scene(&mut self, old: &SceneFields, new: &SceneDetails) -> DiffResult<()> {
        let fields = &new.fields;
        self.scalar("Title", old.title.as_ref(), fields.title.as_ref())?
            .scalar("Details", old.details.as_ref(), fields.details.as_ref())?
            .scalar("Date", old.date.as_ref(), fields.date.as_ref())?
            .scalar("Duration", old.duration, fields.duration)?
            .scalar("Director", old.director.as_ref(), fields.director.as_ref())?
            .scalar("Studio Code", old.code.as_ref(), fields.code.as_ref())?
            .scalar(
                "Studio",
                old.studio.as_ref().map(|s| &s.name),
                fields.studio.as_ref().map(|s| &s.name),
            )?
            .set("Performers", &new.added_performers, &new.removed_performers)?
            .set("Tags", &new.added_tags, &new.removed_tags)?
            .set("URLs", &new.added_urls, &new.removed_urls)?
            .set("Images", &new.added_images, &new.removed_images)?
            .set(
                "Fingerprints",
                &new.added_fingerprints,
                &new.removed_fingerprints,
            )?;
        Ok(())
    }

    fn studio(&mut self, old: &StudioFields, new: &StudioDetails) -> DiffResult<()> {
        let fields = &new.fields;
        self.scalar("Name", old.name.as_ref(), fields.name.as_ref())?
            .set("Aliases", &new.added_aliases, &new.removed_aliases)?
            .scalar(
                "Network",
                old.parent.as_ref().map(|p| &p.name),
                fields.parent.as_ref().map(|p| &p.name),
            )?
            .set("URLs", &new.added_urls, &new.removed_urls)?
            .set("Images", &new.added_images, &new.removed_images)?;
        Ok(())
    }

    fn tag(&mut self, old: &TagFields, new: &TagDetails) -> DiffResult<()> {
        let fields = &new.fields;
        self.scalar("Name", old.name.as_ref(), fields.name.as_ref())?
            .scalar(
                "Description",
                old.description.as_ref(),
                fields.description.as_ref(),
            )?
            .set("Aliases", &new.added_aliases, &new.removed_aliases)?
            .scalar(
                "Category",
                old.category.as_ref().map(|c| &c.name),
                fields.category.as_ref().map(|c| &c.name),
            )?;
        Ok(())
    }

    fn finish(self) -> ChangeSet {
        ChangeSet {
            entries: self.entries,
        }
    }
}
