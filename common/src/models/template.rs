use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ids::{ElementId, TemplateId};

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An ordered composition of element ids.
///
/// `elements` is kept exactly as submitted. Its order is the presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTemplate {
    pub id: TemplateId,
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub elements: Vec<ElementId>,
}

impl ContractTemplate {
    pub fn created_at_display(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTemplate {
    pub name: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub elements: Vec<ElementId>,
}

impl NewTemplate {
    pub fn with_id(self, id: TemplateId) -> ContractTemplate {
        ContractTemplate {
            id,
            name: self.name,
            active: self.active,
            created_at: self.created_at,
            elements: self.elements,
        }
    }
}

/// Fields a caller asked to change.
///
/// `None` means the key was absent and the current value is kept. A present
/// but empty `elements` replaces the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TemplatePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub elements: Option<Vec<ElementId>>,
}
