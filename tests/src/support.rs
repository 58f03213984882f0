use std::sync::Arc;

use chrono::{TimeZone, Utc};

use pactum_common::models::ids::{CompanyId, ElementId, EmployeeId};
use pactum_common::models::party::{Company, Employee};
use pactum_core::clock::FixedClock;
use pactum_core::elements::ElementDraft;
use pactum_core::engine::Engine;
use pactum_core::store::InMemoryStore;

/// 2024-06-03 09:15:00 UTC.
pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 6, 3, 9, 15, 0).unwrap()))
}

pub fn engine() -> (Arc<InMemoryStore>, Engine) {
    engine_over(InMemoryStore::new())
}

pub fn engine_over(store: InMemoryStore) -> (Arc<InMemoryStore>, Engine) {
    let store = Arc::new(store);
    let engine = Engine::with_clock(store.clone(), clock());
    (store, engine)
}

pub fn add_employee(store: &InMemoryStore, id: u64) -> anyhow::Result<EmployeeId> {
    store.add_company(Company {
        id: CompanyId(1),
        name: "Acme".into(),
        address: "1 Main Street".into(),
    })?;
    store.add_employee(Employee {
        id: EmployeeId(id),
        company_id: CompanyId(1),
        name: format!("employee {id}"),
        email: format!("e{id}@acme.test"),
    })?;
    Ok(EmployeeId(id))
}

pub fn paragraph(engine: &Engine, name: &str, optional: bool) -> anyhow::Result<ElementId> {
    let element = engine.elements.create(ElementDraft {
        element_type: "paragraph".into(),
        name: name.into(),
        is_optional: Some(optional),
        text: Some(format!("{name} text")),
        ..ElementDraft::default()
    })?;
    Ok(element.id)
}

pub fn image(engine: &Engine, name: &str, optional: bool) -> anyhow::Result<ElementId> {
    let element = engine.elements.create(ElementDraft {
        element_type: "image".into(),
        name: name.into(),
        is_optional: Some(optional),
        url: Some(format!("https://cdn.acme.test/{name}.png")),
        ..ElementDraft::default()
    })?;
    Ok(element.id)
}

pub fn input(
    engine: &Engine,
    name: &str,
    input_type: &str,
    optional: bool,
) -> anyhow::Result<ElementId> {
    let element = engine.elements.create(ElementDraft {
        element_type: "input_field".into(),
        name: name.into(),
        is_optional: Some(optional),
        label: Some(name.to_uppercase()),
        input_type: Some(input_type.into()),
        ..ElementDraft::default()
    })?;
    Ok(element.id)
}

/// Two required paragraphs and a required signature, the smallest valid template.
pub fn minimal_valid(engine: &Engine) -> anyhow::Result<Vec<ElementId>> {
    Ok(vec![
        paragraph(engine, "P1", false)?,
        paragraph(engine, "P2", false)?,
        input(engine, "S1", "signature", false)?,
    ])
}
