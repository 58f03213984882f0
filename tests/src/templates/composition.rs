use pactum_common::error::{ErrorKind, PactumError};
use pactum_common::models::ids::ElementId;
use pactum_common::models::template::TemplatePatch;
use pactum_core::elements::ElementPatch;
use pactum_core::templates::TemplateDraft;

use crate::support::{engine, image, input, minimal_valid, paragraph};

fn draft(name: &str, elements: &[ElementId]) -> TemplateDraft {
    TemplateDraft {
        name: name.into(),
        active: None,
        elements: elements.to_vec(),
    }
}

#[test]
fn minimal_template_is_stored_and_viewed_in_literal_order() {
    let (_, engine) = engine();
    let elements = minimal_valid(&engine).unwrap();

    assert!(engine.templates.validator().validate(&elements).is_ok());
    let template = engine.templates.create(draft("employment", &elements)).unwrap();
    assert_eq!(template.elements, elements);
    assert!(!template.active);

    let view = engine.templates.view(template.id).unwrap();
    let names: Vec<&str> = view.elements.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["P1", "P2", "S1"]);
    assert_eq!(view.created_at, "2024-06-03 09:15:00");
}

#[test]
fn reversed_order_is_never_resorted() {
    let (_, engine) = engine();
    let mut elements = minimal_valid(&engine).unwrap();
    elements.reverse();

    let template = engine.templates.create(draft("reversed", &elements)).unwrap();
    let stored = engine.templates.get(template.id).unwrap();
    assert_eq!(stored.elements, elements);

    let listed = engine.templates.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].elements, elements);
}

#[test]
fn first_failing_rule_is_the_only_one_reported() {
    let (_, engine) = engine();
    let p1 = paragraph(&engine, "P1", false).unwrap();

    // duplicated, unknown and too short at once
    let err = engine
        .templates
        .validator()
        .validate(&[p1, p1, ElementId(99)])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateElements);

    let err = engine
        .templates
        .validator()
        .validate(&[p1, ElementId(99)])
        .unwrap_err();
    assert!(matches!(err, PactumError::UnknownElements(ref ids) if ids == &[ElementId(99)]));

    let p2 = paragraph(&engine, "P2", false).unwrap();
    let err = engine.templates.validator().validate(&[p1, p2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TooFewElements);
}

#[test]
fn composition_rules_table() {
    let (_, engine) = engine();
    let p1 = paragraph(&engine, "P1", false).unwrap();
    let p2 = paragraph(&engine, "P2", false).unwrap();
    let logo = image(&engine, "logo", false).unwrap();
    let sig = input(&engine, "S1", "signature", false).unwrap();
    let phone = input(&engine, "phone", "phone", false).unwrap();
    let validator = engine.templates.validator();

    assert_eq!(
        validator.validate(&[p1, logo, sig]).unwrap_err().kind(),
        ErrorKind::InsufficientParagraphs
    );
    assert_eq!(
        validator.validate(&[p1, p2, phone]).unwrap_err().kind(),
        ErrorKind::MissingSignatureField
    );
    assert!(validator.validate(&[p1, p2, sig]).is_ok());
    assert!(validator.validate(&[logo, p2, phone, sig, p1]).is_ok());
}

#[test]
fn elements_are_shared_between_templates() {
    let (_, engine) = engine();
    let elements = minimal_valid(&engine).unwrap();

    let first = engine.templates.create(draft("first", &elements)).unwrap();
    let second = engine.templates.create(draft("second", &elements)).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(engine.elements.list().unwrap().len(), 3);
}

#[test]
fn update_swaps_elements_and_keeps_the_rest() {
    let (_, engine) = engine();
    let elements = minimal_valid(&engine).unwrap();
    let template = engine.templates.create(draft("nda", &elements)).unwrap();

    let extra = paragraph(&engine, "P3", true).unwrap();
    let replacement = vec![elements[2], extra, elements[0], elements[1]];
    let updated = engine
        .templates
        .update(
            template.id,
            TemplatePatch {
                elements: Some(replacement.clone()),
                ..TemplatePatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.elements, replacement);
    assert_eq!(updated.name, "nda");
    assert_eq!(updated.created_at, template.created_at);
}

#[test]
fn element_edits_surface_on_next_template_update() {
    let (_, engine) = engine();
    let elements = minimal_valid(&engine).unwrap();
    let template = engine.templates.create(draft("nda", &elements)).unwrap();

    // turning the only signature into an email field is accepted on the element
    engine
        .elements
        .update(
            elements[2],
            ElementPatch {
                input_type: Some("email".into()),
                ..ElementPatch::default()
            },
        )
        .unwrap();

    let err = engine
        .templates
        .update(
            template.id,
            TemplatePatch {
                active: Some(true),
                ..TemplatePatch::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingSignatureField);
    assert!(!engine.templates.get(template.id).unwrap().active);
}
