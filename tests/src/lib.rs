//! Cross-crate scenarios for the contract engine.
//!
//! Everything here drives the public services through an [`Engine`]
//! backed by the in-memory store, the same way the binary does.
//!
//! [`Engine`]: pactum_core::engine::Engine

pub mod support;

#[cfg(test)]
mod contracts;
