//! # Pactum Common
//!
//! Shared vocabulary of the contract engine. Nothing in here performs IO.
//!
//! * **[`models`]**: Elements, templates, contracts and the directory entities they reference.
//! * **[`store`]**: Repository traits the services are written against.
//! * **[`views`]**: Presentation shapes handed to whatever serializes responses.
//! * **[`error`]**: The single error taxonomy every operation reports through.
//! * **[`config`]**: Runtime settings assembled by the binary.

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod views;
