//! Contract-checked entry point: operation + form + original → change set.

use serde::{Deserialize, Serialize};
use tracing::debug;

use sbx_types::{EditOperation, Entity};

use crate::change_set::ChangeSet;
use crate::details::{EditDetails, OldEditDetails};
use crate::error::{DiffError, DiffResult};
use crate::forms::EntityForm;
use crate::performer::diff_performer;
use crate::scene::diff_scene;
use crate::studio::diff_studio;
use crate::tag::diff_tag;

/// Everything computed for one edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditChanges {
    pub operation: EditOperation,
    /// Absent for CREATE and DESTROY.
    pub old: Option<OldEditDetails>,
    /// Absent for DESTROY.
    pub new: Option<EditDetails>,
    pub change_set: ChangeSet,
}

/// Diff a form against an entity of the same kind.
pub fn diff_entity(
    form: &EntityForm,
    original: Option<&Entity>,
) -> DiffResult<(OldEditDetails, EditDetails)> {
    let details = match (form, original) {
        (EntityForm::Performer(form), None) => {
            let (old, new) = diff_performer(form, None);
            (OldEditDetails::Performer(old), EditDetails::Performer(new))
        }
        (EntityForm::Performer(form), Some(Entity::Performer(p))) => {
            let (old, new) = diff_performer(form, Some(p));
            (OldEditDetails::Performer(old), EditDetails::Performer(new))
        }
        (EntityForm::Scene(form), None) => {
            let (old, new) = diff_scene(form, None);
            (OldEditDetails::Scene(old), EditDetails::Scene(new))
        }
        (EntityForm::Scene(form), Some(Entity::Scene(s))) => {
            let (old, new) = diff_scene(form, Some(s));
            (OldEditDetails::Scene(old), EditDetails::Scene(new))
        }
        (EntityForm::Studio(form), None) => {
            let (old, new) = diff_studio(form, None);
            (OldEditDetails::Studio(old), EditDetails::Studio(new))
        }
        (EntityForm::Studio(form), Some(Entity::Studio(s))) => {
            let (old, new) = diff_studio(form, Some(s));
            (OldEditDetails::Studio(old), EditDetails::Studio(new))
        }
        (EntityForm::Tag(form), None) => {
            let (old, new) = diff_tag(form, None);
            (OldEditDetails::Tag(old), EditDetails::Tag(new))
        }
        (EntityForm::Tag(form), Some(Entity::Tag(t))) => {
            let (old, new) = diff_tag(form, Some(t));
            (OldEditDetails::Tag(old), EditDetails::Tag(new))
        }
        (form, Some(original)) => {
            return Err(DiffError::KindMismatch {
                form: form.target_type(),
                original: original.target_type(),
            })
        }
    };
    Ok(details)
}

/// Compute the details and change set of an edit.
///
/// CREATE takes no original; MODIFY and MERGE compare against their target.
/// DESTROY names its target but carries no form, so its change set is
/// always empty.
pub fn compute_edit(
    operation: EditOperation,
    form: Option<&EntityForm>,
    original: Option<&Entity>,
) -> DiffResult<EditChanges> {
    if !operation.carries_details() {
        if form.is_some() {
            debug!(%operation, "rejected edit with form");
            return Err(DiffError::UnexpectedForm { operation });
        }
        if original.is_none() {
            debug!(%operation, "rejected edit without original");
            return Err(DiffError::MissingOriginal { operation });
        }
        return Ok(EditChanges {
            operation,
            old: None,
            new: None,
            change_set: ChangeSet::new(),
        });
    }

    let Some(form) = form else {
        debug!(%operation, "rejected edit without form");
        return Err(DiffError::MissingForm { operation });
    };

    match (operation.requires_target(), original.is_some()) {
        (true, false) => {
            debug!(%operation, kind = %form.target_type(), "rejected edit without original");
            return Err(DiffError::MissingOriginal { operation });
        }
        (false, true) => {
            debug!(%operation, kind = %form.target_type(), "rejected create with original");
            return Err(DiffError::UnexpectedOriginal { operation });
        }
        _ => {}
    }

    let show_diff = original.is_some();
    let (old, new) = diff_entity(form, original)?;
    let old = show_diff.then_some(old);
    let change_set = ChangeSet::from_details(old.as_ref(), &new, show_diff)?;

    debug!(
        %operation,
        kind = %new.target_type(),
        fields = change_set.len(),
        "computed change set"
    );

    Ok(EditChanges {
        operation,
        old,
        new: Some(new),
        change_set,
    })
}

/// Compute only the change set of an edit.
pub fn compute_change_set(
    operation: EditOperation,
    form: Option<&EntityForm>,
    original: Option<&Entity>,
) -> DiffResult<ChangeSet> {
    Ok(compute_edit(operation, form, original)?.change_set)
}
