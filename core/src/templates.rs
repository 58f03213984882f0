//! # Template Composer
//!
//! Builds and updates templates from element-id sequences, delegating every
//! structural check to [`TemplateValidator`]. Templates store ids only, in
//! the order submitted.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use pactum_common::error::{Entity, PactumError, Result};
use pactum_common::models::element::ContractElement;
use pactum_common::models::ids::{ElementId, TemplateId};
use pactum_common::models::template::{ContractTemplate, NewTemplate, TemplatePatch};
use pactum_common::store::{ElementStore, TemplateStore};
use pactum_common::views::{ElementView, TemplateView};

use crate::clock::Clock;
use crate::validation::TemplateValidator;

/// Input for [`TemplateComposer::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateDraft {
    pub name: String,
    /// Defaults to inactive when absent.
    pub active: Option<bool>,
    pub elements: Vec<ElementId>,
}

pub struct TemplateComposer {
    templates: Arc<dyn TemplateStore>,
    elements: Arc<dyn ElementStore>,
    validator: TemplateValidator,
    clock: Arc<dyn Clock>,
}

impl TemplateComposer {
    pub fn new(
        templates: Arc<dyn TemplateStore>,
        elements: Arc<dyn ElementStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            validator: TemplateValidator::new(elements.clone()),
            templates,
            elements,
            clock,
        }
    }

    pub fn validator(&self) -> &TemplateValidator {
        &self.validator
    }

    pub fn create(&self, draft: TemplateDraft) -> Result<ContractTemplate> {
        self.check_name(&draft.name, None)?;
        self.validator
            .validate(&draft.elements)
            .inspect_err(|err| warn!(name = %draft.name, %err, "Rejected template"))?;

        let template = self.templates.insert(NewTemplate {
            name: draft.name,
            active: draft.active.unwrap_or(false),
            created_at: self.clock.now(),
            elements: draft.elements,
        })?;
        info!(id = %template.id, name = %template.name, elements = template.elements.len(), "Created template");
        Ok(template)
    }

    /// Applies `patch` to a stored template.
    ///
    /// The resulting element sequence is re-validated whether or not it was
    /// part of the patch. Nothing is written unless every check passes.
    pub fn update(&self, id: TemplateId, patch: TemplatePatch) -> Result<ContractTemplate> {
        let mut template = self.get(id)?;

        if let Some(name) = &patch.name {
            self.check_name(name, Some(id))?;
        }
        let elements = patch.elements.unwrap_or_else(|| template.elements.clone());
        self.validator
            .validate(&elements)
            .inspect_err(|err| warn!(%id, %err, "Rejected template update"))?;

        if let Some(name) = patch.name {
            template.name = name;
        }
        if let Some(active) = patch.active {
            template.active = active;
        }
        template.elements = elements;

        self.templates.update(&template)?;
        info!(%id, name = %template.name, active = template.active, "Updated template");
        Ok(template)
    }

    pub fn get(&self, id: TemplateId) -> Result<ContractTemplate> {
        self.templates
            .find_by_id(id)?
            .ok_or_else(|| PactumError::not_found(Entity::Template, id.get()))
    }

    pub fn list(&self) -> Result<Vec<ContractTemplate>> {
        Ok(self.templates.find_all()?)
    }

    /// Presentation form with every element resolved, in template order.
    pub fn to_view(&self, template: &ContractTemplate) -> Result<TemplateView> {
        let elements = resolve_elements(self.elements.as_ref(), template)?;
        Ok(TemplateView {
            id: template.id,
            name: template.name.clone(),
            active: template.active,
            created_at: template.created_at_display(),
            elements: elements.iter().map(ElementView::from).collect(),
        })
    }

    pub fn view(&self, id: TemplateId) -> Result<TemplateView> {
        self.to_view(&self.get(id)?)
    }

    fn check_name(&self, name: &str, current: Option<TemplateId>) -> Result<()> {
        if name.is_empty() {
            return Err(PactumError::NameRequired {
                entity: Entity::Template,
            });
        }
        match self.templates.find_by_name(name)? {
            Some(existing) if Some(existing.id) != current => Err(PactumError::DuplicateName {
                entity: Entity::Template,
                name: name.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Resolves a template's element ids, in order, against the current store.
///
/// Fails on the first id that no longer resolves instead of dropping it.
pub fn resolve_elements(
    store: &dyn ElementStore,
    template: &ContractTemplate,
) -> Result<Vec<ContractElement>> {
    let by_id: HashMap<ElementId, ContractElement> = store
        .find_by_ids(&template.elements)?
        .into_iter()
        .map(|e| (e.id, e))
        .collect();

    template
        .elements
        .iter()
        .map(|id| {
            by_id.get(id).cloned().ok_or(PactumError::DanglingReference {
                template: template.id,
                element: *id,
            })
        })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
