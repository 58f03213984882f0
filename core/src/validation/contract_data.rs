//! # Contract Data Validator
//!
//! Submitted data must carry exactly one truthy value per input field of the
//! template, keyed by the field's element id.

use std::sync::Arc;

use tracing::debug;

use pactum_common::error::{PactumError, Result};
use pactum_common::models::contract::{ContractData, is_filled};
use pactum_common::models::element::ContractElement;
use pactum_common::models::template::ContractTemplate;
use pactum_common::store::ElementStore;

use crate::templates::resolve_elements;

pub struct ContractDataValidator {
    elements: Arc<dyn ElementStore>,
}

impl ContractDataValidator {
    pub fn new(elements: Arc<dyn ElementStore>) -> Self {
        Self { elements }
    }

    /// Resolves the template's current elements and checks `data` against its input fields.
    pub fn validate(&self, template: &ContractTemplate, data: &ContractData) -> Result<()> {
        let elements = resolve_elements(self.elements.as_ref(), template)?;
        let fields: Vec<&ContractElement> = elements.iter().filter(|e| e.is_input_field()).collect();
        check_contract_data(&fields, data)
    }
}

/// `fields` are checked in the order given; the first one without data is reported.
pub fn check_contract_data(fields: &[&ContractElement], data: &ContractData) -> Result<()> {
    if data.len() != fields.len() {
        debug!(expected = fields.len(), submitted = data.len(), "Contract data count mismatch");
        return Err(PactumError::DataCountMismatch {
            expected: fields.len(),
            submitted: data.len(),
        });
    }

    for field in fields {
        let filled = data.get(&field.id.to_string()).is_some_and(is_filled);
        if !filled {
            return Err(PactumError::MissingFieldData {
                field: field.name.clone(),
            });
        }
    }

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
