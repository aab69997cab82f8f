//! End-to-end change set scenarios over the public API.

use serde_json::json;

use sbx_diff::{
    compute_change_set, compute_edit, EntityForm, FieldChange, PerformerForm, SceneForm,
    ScenePerformerInput,
};
use sbx_types::{
    EditOperation, Entity, EntityId, Fingerprint, FingerprintAlgorithm, Gender, Performer,
    PerformerAppearance, PerformerRef, Scene, Site, Url,
};

fn performer() -> Performer {
    Performer {
        id: EntityId::from_u128(1),
        name: "Jane Doe".into(),
        aliases: vec!["JD".into(), "Janie".into()],
        gender: Some(Gender::Female),
        country: Some("US".into()),
        height: Some(165),
        urls: vec![Url::new(
            "https://example.com/jane",
            Site {
                id: EntityId::from_u128(50),
                name: "Example".into(),
            },
        )],
        ..Default::default()
    }
}

#[test]
fn country_only_modify_yields_one_entry() {
    let original = performer();
    let mut form = PerformerForm::from_performer(&original);
    form.country = Some("CA".into());

    let changes = compute_change_set(
        EditOperation::Modify,
        Some(&EntityForm::Performer(form)),
        Some(&Entity::Performer(original)),
    )
    .unwrap();

    assert_eq!(changes.len(), 1);
    assert_eq!(
        changes.get("Country"),
        Some(&FieldChange::Scalar {
            old: Some(json!("US")),
            new: Some(json!("CA")),
            show_diff: true,
        })
    );
}

#[test]
fn alias_reorder_is_not_a_change() {
    let original = performer();
    let mut form = PerformerForm::from_performer(&original);
    form.aliases.reverse();

    let changes = compute_change_set(
        EditOperation::Modify,
        Some(&EntityForm::Performer(form)),
        Some(&Entity::Performer(original)),
    )
    .unwrap();
    assert!(changes.is_empty());
}

#[test]
fn create_lists_every_present_field_without_diff() {
    let form = PerformerForm::from_performer(&performer());
    let changes = compute_change_set(
        EditOperation::Create,
        Some(&EntityForm::Performer(form)),
        None,
    )
    .unwrap();

    assert_eq!(
        changes.fields(),
        vec!["Name", "Aliases", "Gender", "Height", "Country", "URLs"]
    );
    for entry in &changes {
        if let FieldChange::Scalar { old, show_diff, .. } = &entry.change {
            assert!(old.is_none());
            assert!(!show_diff);
        }
    }
}

#[test]
fn scene_modify_reports_sets_and_scalars() {
    let jane = PerformerRef {
        id: EntityId::from_u128(1),
        name: "Jane Doe".into(),
        disambiguation: None,
        gender: Some(Gender::Female),
    };
    let original = Scene {
        id: EntityId::from_u128(100),
        title: Some("Sunset".into()),
        performers: vec![PerformerAppearance {
            performer: jane.clone(),
            as_name: None,
        }],
        ..Default::default()
    };

    let mut form = SceneForm::from_scene(&original);
    form.title = Some("Sunrise".into());
    form.performers = vec![ScenePerformerInput {
        performer: Some(jane),
        as_name: Some("JD".into()),
    }];
    form.fingerprints.push(Fingerprint {
        hash: "deadbeef".into(),
        algorithm: FingerprintAlgorithm::Oshash,
        duration: 1800,
    });

    let edit = compute_edit(
        EditOperation::Modify,
        Some(&EntityForm::Scene(form)),
        Some(&Entity::Scene(original)),
    )
    .unwrap();

    assert_eq!(edit.change_set.fields(), vec!["Title", "Performers", "Fingerprints"]);
    match edit.change_set.get("Performers") {
        Some(FieldChange::Set { added, removed }) => {
            assert_eq!(added.len(), 1);
            assert_eq!(removed.len(), 1);
            assert_eq!(added[0]["as"], "JD");
        }
        other => panic!("unexpected change: {other:?}"),
    }
}

#[test]
fn zero_to_blank_is_not_a_change() {
    let original = Performer {
        height: Some(0),
        ..performer()
    };
    let mut form = PerformerForm::from_performer(&original);
    form.height = None;

    let changes = compute_change_set(
        EditOperation::Modify,
        Some(&EntityForm::Performer(form)),
        Some(&Entity::Performer(original)),
    )
    .unwrap();
    assert!(changes.get("Height").is_none());
}
