//! # Store Adapters
//!
//! * [`memory::InMemoryStore`]: implements every port from `pactum_common::store` behind one lock.
//! * [`snapshot`]: loads and saves the whole store as a single JSON document.

pub mod memory;
pub mod snapshot;

pub use memory::InMemoryStore;
pub use snapshot::Snapshot;
