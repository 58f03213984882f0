//! # Pactum Core
//!
//! The contract-template composition and validation engine.
//!
//! * **[`validation`]**: Structural template rules and contract-data completeness.
//! * **[`elements`]**: Creating and patching reusable elements.
//! * **[`templates`]**: Composing templates from element ids and resolving them for presentation.
//! * **[`contracts`]**: Signing a template with submitted input-field values.
//! * **[`store`]**: The in-memory adapter and its JSON snapshot persistence.
//! * **[`engine`]**: Wires the services to a single store.

pub mod clock;
pub mod contracts;
pub mod elements;
pub mod engine;
pub mod store;
pub mod templates;
pub mod validation;

#[cfg(test)]
pub(crate) mod fixtures;
