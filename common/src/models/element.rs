//! # Contract Elements
//!
//! An element is a shared, reusable building block. Templates reference
//! elements by id and never own them.
//!
//! The variant payload lives in [`ElementBody`]. The element type is derived
//! from it, so the discriminant and the payload cannot disagree.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PactumError;
use crate::models::ids::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Paragraph,
    Image,
    InputField,
}

impl ElementType {
    /// Every supported element type, in presentation order.
    pub const ALL: [ElementType; 3] = [Self::Paragraph, Self::Image, Self::InputField];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Image => "image",
            Self::InputField => "input_field",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = PactumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PactumError::UnsupportedType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputType {
    Phone,
    Signature,
    Email,
    Address,
    Name,
}

impl InputType {
    pub const ALL: [InputType; 5] = [
        Self::Phone,
        Self::Signature,
        Self::Email,
        Self::Address,
        Self::Name,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Signature => "signature",
            Self::Email => "email",
            Self::Address => "address",
            Self::Name => "name",
        }
    }

    /// Comma separated list used in error messages.
    pub fn supported_list() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = PactumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PactumError::UnsupportedInputType(s.to_string()))
    }
}

/// Type-specific payload of an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "element_type", rename_all = "snake_case")]
pub enum ElementBody {
    Paragraph { text: String },
    Image { url: String },
    InputField { label: String, input_type: InputType },
}

impl ElementBody {
    pub const fn element_type(&self) -> ElementType {
        match self {
            Self::Paragraph { .. } => ElementType::Paragraph,
            Self::Image { .. } => ElementType::Image,
            Self::InputField { .. } => ElementType::InputField,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractElement {
    pub id: ElementId,
    pub name: String,
    pub is_optional: bool,
    #[serde(flatten)]
    pub body: ElementBody,
}

impl ContractElement {
    pub const fn element_type(&self) -> ElementType {
        self.body.element_type()
    }

    pub const fn is_required(&self) -> bool {
        !self.is_optional
    }

    pub const fn is_input_field(&self) -> bool {
        matches!(self.body, ElementBody::InputField { .. })
    }

    pub const fn is_signature_field(&self) -> bool {
        matches!(
            self.body,
            ElementBody::InputField {
                input_type: InputType::Signature,
                ..
            }
        )
    }

    pub const fn is_paragraph(&self) -> bool {
        matches!(self.body, ElementBody::Paragraph { .. })
    }
}

/// An element that has passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewElement {
    pub name: String,
    pub is_optional: bool,
    pub body: ElementBody,
}

impl NewElement {
    pub fn with_id(self, id: ElementId) -> ContractElement {
        ContractElement {
            id,
            name: self.name,
            is_optional: self.is_optional,
            body: self.body,
        }
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
