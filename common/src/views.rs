//! # Presentation Views
//!
//! Pure functions of entity fields: the shapes an outer layer serializes.
//! Template views need element lookups and are built by the composer in
//! `pactum-core`. This module only defines their shape.

use serde::Serialize;

use crate::models::contract::{Contract, ContractData};
use crate::models::element::{ContractElement, ElementBody, ElementType, InputType};
use crate::models::ids::{ContractId, ElementId, EmployeeId, TemplateId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementView {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub name: String,
    pub is_optional: bool,
    #[serde(flatten)]
    pub details: ElementDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ElementDetails {
    Paragraph { text: String },
    Image { url: String },
    InputField { label: String, input_type: InputType },
}

impl From<&ContractElement> for ElementView {
    fn from(element: &ContractElement) -> Self {
        let details = match &element.body {
            ElementBody::Paragraph { text } => ElementDetails::Paragraph { text: text.clone() },
            ElementBody::Image { url } => ElementDetails::Image { url: url.clone() },
            ElementBody::InputField { label, input_type } => ElementDetails::InputField {
                label: label.clone(),
                input_type: *input_type,
            },
        };
        Self {
            id: element.id,
            element_type: element.element_type(),
            name: element.name.clone(),
            is_optional: element.is_optional,
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateView {
    pub id: TemplateId,
    pub name: String,
    pub active: bool,
    /// Formatted as `%Y-%m-%d %H:%M:%S`.
    pub created_at: String,
    pub elements: Vec<ElementView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractView {
    pub id: ContractId,
    pub employee_id: EmployeeId,
    pub template_id: TemplateId,
    pub contract_data: ContractData,
    /// ISO-8601 date.
    pub signed_date: String,
}

impl From<&Contract> for ContractView {
    fn from(contract: &Contract) -> Self {
        Self {
            id: contract.id,
            employee_id: contract.employee_id,
            template_id: contract.template_id,
            contract_data: contract.contract_data.clone(),
            signed_date: contract.signed_date.format("%Y-%m-%d").to_string(),
        }
    }
}
