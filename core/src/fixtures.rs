use std::sync::Arc;

use pactum_common::models::element::{ContractElement, ElementBody, InputType, NewElement};
use pactum_common::models::ids::ElementId;
use pactum_common::store::ElementStore;

use crate::store::InMemoryStore;

/// Seeds an in-memory store with elements for unit tests.
pub struct Catalog {
    store: Arc<InMemoryStore>,
    elements: Vec<ContractElement>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryStore::new()),
            elements: Vec::new(),
        }
    }

    pub fn paragraph(&mut self, name: &str, optional: bool) -> ElementId {
        self.add(name, optional, ElementBody::Paragraph {
            text: format!("{name} body"),
        })
    }

    pub fn image(&mut self, name: &str, optional: bool) -> ElementId {
        self.add(name, optional, ElementBody::Image {
            url: format!("https://cdn.example.com/{name}.png"),
        })
    }

    pub fn input(&mut self, name: &str, input_type: InputType, optional: bool) -> ElementId {
        self.add(name, optional, ElementBody::InputField {
            label: name.to_uppercase(),
            input_type,
        })
    }

    pub fn store(&self) -> Arc<dyn ElementStore> {
        self.store.clone()
    }

    pub fn memory(&self) -> Arc<InMemoryStore> {
        self.store.clone()
    }

    pub fn elements(&self) -> &[ContractElement] {
        &self.elements
    }

    fn add(&mut self, name: &str, optional: bool, body: ElementBody) -> ElementId {
        let element = ElementStore::insert(
            self.store.as_ref(),
            NewElement {
                name: name.to_string(),
                is_optional: optional,
                body,
            },
        )
        .expect("in-memory insert");
        let id = element.id;
        self.elements.push(element);
        id
    }
}

pub fn ids(elements: &[ContractElement]) -> Vec<ElementId> {
    elements.iter().map(|e| e.id).collect()
}
