//! Dispatch a draft of any kind to its reconciler.

use serde::{Deserialize, Serialize};
use tracing::debug;

use sbx_diff::EntityForm;
use sbx_types::Entity;

use crate::draft::Draft;
use crate::error::{DraftError, DraftResult};
use crate::performer::reconcile_performer;
use crate::scene::reconcile_scene;
use crate::unmatched::UnmatchedFields;

/// A seeded form and whatever draft text did not fit into it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciled {
    pub form: EntityForm,
    pub unmatched: UnmatchedFields,
}

/// Reconcile `draft` with the entity it updates, if any.
///
/// A draft that names a target must be given that entity, and the entity
/// must be of the draft's kind.
pub fn reconcile(draft: &Draft, existing: Option<&Entity>) -> DraftResult<Reconciled> {
    if let Some(existing) = existing {
        if existing.target_type() != draft.target_type() {
            debug!(draft = %draft.target_type(), existing = %existing.target_type(), "draft kind mismatch");
            return Err(DraftError::KindMismatch {
                draft: draft.target_type(),
                existing: existing.target_type(),
            });
        }
    }

    match (draft.target_id(), existing) {
        (Some(expected), None) => return Err(DraftError::MissingTarget(expected)),
        (Some(expected), Some(entity)) if *entity.id() != expected => {
            return Err(DraftError::TargetMismatch {
                expected,
                actual: *entity.id(),
            })
        }
        _ => {}
    }

    let (form, unmatched) = match (draft, existing) {
        (Draft::Performer(d), Some(Entity::Performer(p))) => {
            let (form, unmatched) = reconcile_performer(d, Some(p));
            (EntityForm::Performer(form), unmatched)
        }
        (Draft::Performer(d), _) => {
            let (form, unmatched) = reconcile_performer(d, None);
            (EntityForm::Performer(form), unmatched)
        }
        (Draft::Scene(d), Some(Entity::Scene(s))) => {
            let (form, unmatched) = reconcile_scene(d, Some(s));
            (EntityForm::Scene(form), unmatched)
        }
        (Draft::Scene(d), _) => {
            let (form, unmatched) = reconcile_scene(d, None);
            (EntityForm::Scene(form), unmatched)
        }
    };

    Ok(Reconciled { form, unmatched })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{PerformerDraft, SceneDraft};
    use sbx_types::{EntityId, Performer, Tag};

    #[test]
    fn kind_mismatch_is_rejected() {
        let draft = Draft::Scene(SceneDraft::default());
        let tag = Entity::Tag(Tag::default());
        assert!(matches!(
            reconcile(&draft, Some(&tag)),
            Err(DraftError::KindMismatch { .. })
        ));
    }

    #[test]
    fn targeted_draft_needs_its_entity() {
        let id = EntityId::from_u128(1);
        let draft = Draft::Performer(PerformerDraft {
            id: Some(id),
            ..Default::default()
        });
        assert!(matches!(reconcile(&draft, None), Err(DraftError::MissingTarget(_))));

        let other = Entity::Performer(Performer {
            id: EntityId::from_u128(2),
            ..Default::default()
        });
        assert!(matches!(
            reconcile(&draft, Some(&other)),
            Err(DraftError::TargetMismatch { .. })
        ));
    }

    #[test]
    fn new_performer_draft_seeds_form() {
        let draft = Draft::Performer(PerformerDraft {
            name: "Jane".into(),
            gender: Some("Robot".into()),
            ..Default::default()
        });
        let reconciled = reconcile(&draft, None).unwrap();
        match reconciled.form {
            EntityForm::Performer(form) => assert_eq!(form.name, "Jane"),
            other => panic!("unexpected form: {other:?}"),
        }
        assert_eq!(reconciled.unmatched.get("Gender"), Some("Robot"));
    }
}
