use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;

use pactum_common::error::{Entity, ErrorKind, PactumError};
use pactum_common::models::contract::ContractData;
use pactum_common::models::element::{ContractElement, ElementBody, InputType};
use pactum_common::models::ids::{ElementId, EmployeeId, TemplateId};
use pactum_common::models::template::ContractTemplate;
use pactum_core::contracts::ContractDraft;
use pactum_core::store::{InMemoryStore, Snapshot};

use crate::support::{add_employee, engine_over};

fn element(id: u64, name: &str, body: ElementBody) -> ContractElement {
    ContractElement {
        id: ElementId(id),
        name: name.into(),
        is_optional: false,
        body,
    }
}

fn field(id: u64, name: &str, input_type: InputType) -> ContractElement {
    element(
        id,
        name,
        ElementBody::InputField {
            label: name.to_uppercase(),
            input_type,
        },
    )
}

/// Template 1 holds two paragraphs and input fields F1 (id 10) and F2 (id 20).
fn store_with_fields() -> InMemoryStore {
    let paragraph = |id, name: &str| {
        element(
            id,
            name,
            ElementBody::Paragraph {
                text: format!("{name} text"),
            },
        )
    };
    InMemoryStore::from_snapshot(Snapshot {
        elements: vec![
            paragraph(1, "P1"),
            paragraph(2, "P2"),
            field(10, "F1", InputType::Name),
            field(20, "F2", InputType::Signature),
        ],
        templates: vec![ContractTemplate {
            id: TemplateId(1),
            name: "employment".into(),
            active: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            elements: vec![ElementId(1), ElementId(10), ElementId(2), ElementId(20)],
        }],
        ..Snapshot::default()
    })
}

fn data(pairs: &[(&str, serde_json::Value)]) -> ContractData {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

fn sign(employee_id: EmployeeId, contract_data: ContractData) -> ContractDraft {
    ContractDraft {
        employee_id,
        template_id: TemplateId(1),
        contract_data,
    }
}

#[test]
fn partial_data_is_count_mismatch() {
    let (store, engine) = engine_over(store_with_fields());
    let employee = add_employee(&store, 1).unwrap();

    let err = engine
        .contracts
        .create(sign(employee, data(&[("10", json!("a"))])))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataCountMismatch);
}

#[test]
fn empty_value_names_the_field() {
    let (store, engine) = engine_over(store_with_fields());
    let employee = add_employee(&store, 1).unwrap();

    let err = engine
        .contracts
        .create(sign(employee, data(&[("10", json!("a")), ("20", json!(""))])))
        .unwrap_err();
    match err {
        PactumError::MissingFieldData { field } => assert_eq!(field, "F2"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(engine.contracts.list().unwrap().is_empty());
}

#[test]
fn complete_data_is_persisted_verbatim() {
    let (store, engine) = engine_over(store_with_fields());
    let employee = add_employee(&store, 1).unwrap();
    let submitted = data(&[("10", json!("a")), ("20", json!("b"))]);

    let contract = engine
        .contracts
        .create(sign(employee, submitted.clone()))
        .unwrap();
    assert_eq!(contract.contract_data, submitted);
    assert_eq!(contract.template_id, TemplateId(1));
    assert_eq!(contract.signed_date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());

    let stored = engine.contracts.get(contract.id).unwrap();
    assert_eq!(stored.contract_data, submitted);

    let view = serde_json::to_value(engine.contracts.to_view(&stored)).unwrap();
    assert_eq!(view["contract_data"], json!({"10": "a", "20": "b"}));
    assert_eq!(view["signed_date"], "2024-06-03");
}

#[test]
fn unknown_employee_is_checked_before_data() {
    let (_, engine) = engine_over(store_with_fields());

    let err = engine
        .contracts
        .create(sign(EmployeeId(7), ContractData::new()))
        .unwrap_err();
    assert!(matches!(
        err,
        PactumError::NotFound {
            entity: Entity::Employee,
            id: 7
        }
    ));
}

#[test]
fn data_follows_the_templates_current_fields() {
    let (store, engine) = engine_over(store_with_fields());
    let employee = add_employee(&store, 1).unwrap();

    // the template drops F1 and gains an email field
    let extra = engine
        .elements
        .create(pactum_core::elements::ElementDraft {
            element_type: "input_field".into(),
            name: "F3".into(),
            label: Some("Email".into()),
            input_type: Some("email".into()),
            ..Default::default()
        })
        .unwrap();
    engine
        .templates
        .update(
            TemplateId(1),
            pactum_common::models::template::TemplatePatch {
                elements: Some(vec![ElementId(1), ElementId(2), ElementId(20), extra.id]),
                ..Default::default()
            },
        )
        .unwrap();

    let stale = data(&[("10", json!("a")), ("20", json!("b"))]);
    let err = engine.contracts.create(sign(employee, stale)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingFieldData);

    let key = extra.id.to_string();
    let current = data(&[("20", json!("b")), (key.as_str(), json!("x@acme.test"))]);
    assert!(engine.contracts.create(sign(employee, current)).is_ok());
}

#[test]
fn contracts_are_listed_in_creation_order() {
    let (store, engine) = engine_over(store_with_fields());
    let first = add_employee(&store, 1).unwrap();
    let second = add_employee(&store, 2).unwrap();
    let submitted = data(&[("10", json!("a")), ("20", json!("b"))]);

    engine.contracts.create(sign(second, submitted.clone())).unwrap();
    engine.contracts.create(sign(first, submitted)).unwrap();

    let employees: Vec<EmployeeId> = engine
        .contracts
        .list()
        .unwrap()
        .iter()
        .map(|c| c.employee_id)
        .collect();
    assert_eq!(employees, vec![second, first]);
}
