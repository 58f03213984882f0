//! # Element Service
//!
//! Creates and patches contract elements. Elements are shared between
//! templates. Patching one does not re-validate the templates that use it.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use pactum_common::error::{Entity, PactumError, Result};
use pactum_common::models::element::{
    ContractElement, ElementBody, ElementType, InputType, NewElement,
};
use pactum_common::models::ids::ElementId;
use pactum_common::store::ElementStore;

/// Input for [`ElementService::create`].
///
/// Fields that do not belong to `element_type` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementDraft {
    pub element_type: String,
    pub name: String,
    /// Defaults to optional when absent.
    pub is_optional: Option<bool>,
    pub text: Option<String>,
    pub url: Option<String>,
    pub label: Option<String>,
    pub input_type: Option<String>,
}

/// Fields a caller asked to change. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementPatch {
    pub name: Option<String>,
    pub is_optional: Option<bool>,
    pub text: Option<String>,
    pub url: Option<String>,
    pub label: Option<String>,
    pub input_type: Option<String>,
}

pub struct ElementService {
    elements: Arc<dyn ElementStore>,
}

impl ElementService {
    pub fn new(elements: Arc<dyn ElementStore>) -> Self {
        Self { elements }
    }

    pub fn supported_types(&self) -> &'static [ElementType] {
        &ElementType::ALL
    }

    pub fn create(&self, draft: ElementDraft) -> Result<ContractElement> {
        let element_type: ElementType = draft.element_type.parse()?;
        self.check_name(&draft.name, None)?;

        let body = match element_type {
            ElementType::Paragraph => ElementBody::Paragraph {
                text: required(draft.text, element_type, "text")?,
            },
            ElementType::Image => ElementBody::Image {
                url: required(draft.url, element_type, "url")?,
            },
            ElementType::InputField => {
                let label = required(draft.label, element_type, "label")?;
                let input_type: InputType =
                    required(draft.input_type, element_type, "input_type")?.parse()?;
                ElementBody::InputField { label, input_type }
            }
        };

        let element = self.elements.insert(NewElement {
            name: draft.name,
            is_optional: draft.is_optional.unwrap_or(true),
            body,
        })?;
        info!(id = %element.id, kind = %element_type, name = %element.name, "Created element");
        Ok(element)
    }

    /// Applies `patch` to a stored element. A patched `input_type` is always
    /// checked against the supported set.
    pub fn update(&self, id: ElementId, patch: ElementPatch) -> Result<ContractElement> {
        let mut element = self.get(id)?;
        let element_type = element.element_type();

        if let Some(name) = patch.name {
            self.check_name(&name, Some(id))?;
            element.name = name;
        }
        if let Some(is_optional) = patch.is_optional {
            element.is_optional = is_optional;
        }

        match &mut element.body {
            ElementBody::Paragraph { text } => {
                if let Some(new_text) = patch.text {
                    *text = non_empty(new_text, element_type, "text")?;
                }
            }
            ElementBody::Image { url } => {
                if let Some(new_url) = patch.url {
                    *url = non_empty(new_url, element_type, "url")?;
                }
            }
            ElementBody::InputField { label, input_type } => {
                if let Some(new_label) = patch.label {
                    *label = non_empty(new_label, element_type, "label")?;
                }
                if let Some(raw) = patch.input_type {
                    *input_type = raw
                        .parse::<InputType>()
                        .inspect_err(|err| warn!(%id, %err, "Rejected element update"))?;
                }
            }
        }

        self.elements.update(&element)?;
        info!(%id, name = %element.name, "Updated element");
        Ok(element)
    }

    pub fn get(&self, id: ElementId) -> Result<ContractElement> {
        self.elements
            .find_by_id(id)?
            .ok_or_else(|| PactumError::not_found(Entity::Element, id.get()))
    }

    pub fn list(&self) -> Result<Vec<ContractElement>> {
        Ok(self.elements.find_all()?)
    }

    pub fn list_by_type(&self, element_type: &str) -> Result<Vec<ContractElement>> {
        let element_type: ElementType = element_type.parse()?;
        Ok(self.elements.find_by_type(element_type)?)
    }

    fn check_name(&self, name: &str, current: Option<ElementId>) -> Result<()> {
        if name.is_empty() {
            return Err(PactumError::NameRequired {
                entity: Entity::Element,
            });
        }
        match self.elements.find_by_name(name)? {
            Some(existing) if Some(existing.id) != current => Err(PactumError::DuplicateName {
                entity: Entity::Element,
                name: name.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

fn required(value: Option<String>, element_type: ElementType, field: &'static str) -> Result<String> {
    non_empty(value.unwrap_or_default(), element_type, field)
}

fn non_empty(value: String, element_type: ElementType, field: &'static str) -> Result<String> {
    if value.is_empty() {
        Err(PactumError::MissingField {
            element_type,
            field,
        })
    } else {
        Ok(value)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
