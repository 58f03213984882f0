//! # Error Taxonomy
//!
//! Every failed operation reports exactly one [`PactumError`].
//!
//! Business-rule violations are caller-input errors and are returned as
//! values, never panics. Store failures travel separately as
//! [`PactumError::Store`] so they are never mistaken for a validation result.

use std::fmt;

use thiserror::Error;

use crate::models::element::{ElementType, InputType};
use crate::models::ids::{ElementId, TemplateId};

pub type Result<T, E = PactumError> = std::result::Result<T, E>;

/// The kind of record an error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Element,
    Template,
    Contract,
    Employee,
    Company,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Element => "element",
            Self::Template => "contract template",
            Self::Contract => "contract",
            Self::Employee => "employee",
            Self::Company => "company",
        })
    }
}

#[derive(Debug, Error)]
pub enum PactumError {
    #[error("duplicate elements are not allowed")]
    DuplicateElements,

    #[error("invalid element ids (don't exist): {}", join_ids(.0))]
    UnknownElements(Vec<ElementId>),

    #[error("a contract template must have at least {min} elements, got {found}")]
    TooFewElements { found: usize, min: usize },

    #[error("a contract template must have at least {min} non-optional paragraphs, got {found}")]
    InsufficientParagraphs { found: usize, min: usize },

    #[error("a contract template must have at least one non-optional input field of type \"signature\"")]
    MissingSignatureField,

    #[error("a {entity} with the name '{name}' already exists")]
    DuplicateName { entity: Entity, name: String },

    #[error("a name is required for a {entity}")]
    NameRequired { entity: Entity },

    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: u64 },

    #[error("template {template} references element {element}, which no longer exists")]
    DanglingReference {
        template: TemplateId,
        element: ElementId,
    },

    #[error("invalid element type '{0}', supported types: paragraph, image, input_field")]
    UnsupportedType(String),

    #[error("{field} is required for an element of type {element_type}")]
    MissingField {
        element_type: ElementType,
        field: &'static str,
    },

    #[error("input type '{0}' is not supported, supported input types: {list}", list = InputType::supported_list())]
    UnsupportedInputType(String),

    #[error("not enough contract data for input fields: expected {expected} values, got {submitted}")]
    DataCountMismatch { expected: usize, submitted: usize },

    #[error("missing contract data for input field: {field}")]
    MissingFieldData { field: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures of the persistence layer itself.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("store snapshot is malformed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("store lock poisoned while {0}")]
    Poisoned(&'static str),

    #[error("no {0} ids left to assign")]
    IdsExhausted(&'static str),
}

/// Discriminant of [`PactumError`], one per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateElements,
    UnknownElements,
    TooFewElements,
    InsufficientParagraphs,
    MissingSignatureField,
    DuplicateName,
    NameRequired,
    NotFound,
    DanglingReference,
    UnsupportedType,
    MissingField,
    UnsupportedInputType,
    DataCountMismatch,
    MissingFieldData,
    Internal,
}

/// Coarse classes an outer layer can map onto status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    BadRequest,
    NotFound,
    Conflict,
    Internal,
}

impl PactumError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateElements => ErrorKind::DuplicateElements,
            Self::UnknownElements(_) => ErrorKind::UnknownElements,
            Self::TooFewElements { .. } => ErrorKind::TooFewElements,
            Self::InsufficientParagraphs { .. } => ErrorKind::InsufficientParagraphs,
            Self::MissingSignatureField => ErrorKind::MissingSignatureField,
            Self::DuplicateName { .. } => ErrorKind::DuplicateName,
            Self::NameRequired { .. } => ErrorKind::NameRequired,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::DanglingReference { .. } => ErrorKind::DanglingReference,
            Self::UnsupportedType(_) => ErrorKind::UnsupportedType,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::UnsupportedInputType(_) => ErrorKind::UnsupportedInputType,
            Self::DataCountMismatch { .. } => ErrorKind::DataCountMismatch,
            Self::MissingFieldData { .. } => ErrorKind::MissingFieldData,
            Self::Store(_) => ErrorKind::Internal,
        }
    }

    pub const fn category(&self) -> ErrorCategory {
        match self.kind() {
            ErrorKind::NotFound => ErrorCategory::NotFound,
            ErrorKind::DuplicateName => ErrorCategory::Conflict,
            ErrorKind::Internal => ErrorCategory::Internal,
            _ => ErrorCategory::BadRequest,
        }
    }

    pub const fn not_found(entity: Entity, id: u64) -> Self {
        Self::NotFound { entity, id }
    }
}

fn join_ids(ids: &[ElementId]) -> String {
    ids.iter()
        .map(ElementId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
