use proptest::prelude::*;
use proptest::test_runner::Config;

use pactum_common::error::{ErrorKind, PactumError};
use pactum_common::models::ids::ElementId;
use pactum_core::templates::TemplateDraft;

use crate::support::{engine, image, input, paragraph};

/// Seeds five elements (ids 1..=5) so generated sequences have something to hit.
fn seeded() -> pactum_core::engine::Engine {
    let (_, engine) = engine();
    paragraph(&engine, "P1", false).unwrap();
    paragraph(&engine, "P2", false).unwrap();
    input(&engine, "S1", "signature", false).unwrap();
    image(&engine, "logo", true).unwrap();
    input(&engine, "email", "email", true).unwrap();
    engine
}

fn sequence_with_duplicate() -> impl Strategy<Value = Vec<ElementId>> {
    prop::collection::vec(1_u64..12, 1..10).prop_flat_map(|ids| {
        let len = ids.len();
        (Just(ids), 0..len, 0..=len).prop_map(|(mut ids, from, at)| {
            let repeated = ids[from];
            ids.insert(at, repeated);
            ids.into_iter().map(ElementId).collect::<Vec<_>>()
        })
    })
}

fn sequence_with_unknown() -> impl Strategy<Value = (Vec<ElementId>, Vec<ElementId>)> {
    (
        prop::sample::subsequence((1_u64..=5).collect::<Vec<_>>(), 0..=5),
        prop::collection::btree_set(100_u64..200, 1..5),
    )
        .prop_flat_map(|(known, unknown)| {
            let all: Vec<ElementId> = known.into_iter().chain(unknown).map(ElementId).collect();
            Just(all).prop_shuffle()
        })
        .prop_map(|candidate| {
            let missing: Vec<ElementId> = candidate.iter().copied().filter(|id| id.get() >= 100).collect();
            (candidate, missing)
        })
}

proptest! {
    #![proptest_config(Config::with_cases(64))]

    #[test]
    fn repeated_id_is_always_duplicate(candidate in sequence_with_duplicate()) {
        let engine = seeded();
        let err = engine.templates.validator().validate(&candidate).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::DuplicateElements);
    }

    #[test]
    fn unknown_ids_are_listed_exactly((candidate, missing) in sequence_with_unknown()) {
        let engine = seeded();
        match engine.templates.validator().validate(&candidate) {
            Err(PactumError::UnknownElements(reported)) => prop_assert_eq!(reported, missing),
            other => prop_assert!(false, "expected UnknownElements, got {:?}", other),
        }
    }

    #[test]
    fn optional_elements_never_count(
        required_paragraphs in 0_usize..=1,
        optional_paragraphs in 0_usize..6,
        optional_signatures in 1_usize..3,
    ) {
        let (_, engine) = engine();
        let mut candidate = vec![
            input(&engine, "required signature", "signature", false).unwrap(),
            image(&engine, "required logo", false).unwrap(),
        ];
        for i in 0..required_paragraphs {
            candidate.push(paragraph(&engine, &format!("required {i}"), false).unwrap());
        }
        for i in 0..optional_paragraphs {
            candidate.push(paragraph(&engine, &format!("optional {i}"), true).unwrap());
        }
        for i in 0..optional_signatures {
            candidate.push(input(&engine, &format!("optional sig {i}"), "signature", true).unwrap());
        }

        let err = engine.templates.validator().validate(&candidate).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InsufficientParagraphs);
    }

    #[test]
    fn stored_order_matches_submitted_order(
        order in Just((1_u64..=5).map(ElementId).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let engine = seeded();
        let template = engine
            .templates
            .create(TemplateDraft { name: "shuffled".into(), active: Some(true), elements: order.clone() })
            .unwrap();

        prop_assert_eq!(&engine.templates.get(template.id).unwrap().elements, &order);
        let viewed: Vec<ElementId> = engine
            .templates
            .view(template.id)
            .unwrap()
            .elements
            .iter()
            .map(|e| e.id)
            .collect();
        prop_assert_eq!(viewed, order);
    }

    #[test]
    fn revalidation_is_idempotent(
        order in Just((1_u64..=5).map(ElementId).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let engine = seeded();
        let validator = engine.templates.validator();
        let first = validator.validate(&order).map(|e| e.len()).map_err(|e| e.kind());
        let second = validator.validate(&order).map(|e| e.len()).map_err(|e| e.kind());
        prop_assert_eq!(first, Ok(5));
        prop_assert_eq!(second, Ok(5));
    }
}
