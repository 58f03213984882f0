//! # Template Validator
//!
//! Rules, checked in this order:
//! 1. No element id appears twice.
//! 2. Every id resolves to a stored element.
//! 3. At least [`MIN_TEMPLATE_ELEMENTS`] elements.
//! 4. Among non-optional elements, at least [`MIN_REQUIRED_PARAGRAPHS`] paragraphs
//!    and at least [`MIN_REQUIRED_SIGNATURES`] signature input fields.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;

use pactum_common::error::{PactumError, Result};
use pactum_common::models::element::ContractElement;
use pactum_common::models::ids::ElementId;
use pactum_common::store::ElementStore;

pub const MIN_TEMPLATE_ELEMENTS: usize = 3;
pub const MIN_REQUIRED_PARAGRAPHS: usize = 2;
pub const MIN_REQUIRED_SIGNATURES: usize = 1;

pub struct TemplateValidator {
    elements: Arc<dyn ElementStore>,
}

impl TemplateValidator {
    pub fn new(elements: Arc<dyn ElementStore>) -> Self {
        Self { elements }
    }

    /// Checks a candidate sequence against the current store contents.
    ///
    /// On success returns the resolved elements in candidate order.
    pub fn validate(&self, ids: &[ElementId]) -> Result<Vec<ContractElement>> {
        check_unique(ids)?;
        let resolved = self.elements.find_by_ids(ids)?;
        check_composition(ids, resolved)
    }
}

/// The store-free part of [`TemplateValidator::validate`].
///
/// `resolved` holds whatever the store returned for `ids`, in any order.
pub fn check_composition(
    ids: &[ElementId],
    resolved: Vec<ContractElement>,
) -> Result<Vec<ContractElement>> {
    check_unique(ids)?;

    let mut by_id: HashMap<ElementId, ContractElement> =
        resolved.into_iter().map(|e| (e.id, e)).collect();
    let missing: Vec<ElementId> = ids
        .iter()
        .copied()
        .filter(|id| !by_id.contains_key(id))
        .collect();
    if !missing.is_empty() {
        debug!(?missing, "Template references unknown elements");
        return Err(PactumError::UnknownElements(missing));
    }

    if ids.len() < MIN_TEMPLATE_ELEMENTS {
        return Err(PactumError::TooFewElements {
            found: ids.len(),
            min: MIN_TEMPLATE_ELEMENTS,
        });
    }

    let ordered: Vec<ContractElement> = ids.iter().filter_map(|id| by_id.remove(id)).collect();

    let required = ordered.iter().filter(|e| e.is_required());
    let (paragraphs, signatures) = required.fold((0usize, 0usize), |(p, s), e| {
        (
            p + usize::from(e.is_paragraph()),
            s + usize::from(e.is_signature_field()),
        )
    });
    debug!(paragraphs, signatures, "Counted required elements");

    if paragraphs < MIN_REQUIRED_PARAGRAPHS {
        return Err(PactumError::InsufficientParagraphs {
            found: paragraphs,
            min: MIN_REQUIRED_PARAGRAPHS,
        });
    }
    if signatures < MIN_REQUIRED_SIGNATURES {
        return Err(PactumError::MissingSignatureField);
    }

    Ok(ordered)
}

fn check_unique(ids: &[ElementId]) -> Result<()> {
    let mut seen = HashSet::with_capacity(ids.len());
    if ids.iter().all(|id| seen.insert(*id)) {
        Ok(())
    } else {
        Err(PactumError::DuplicateElements)
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
