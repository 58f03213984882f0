//! # Domain Models
//!
//! ## Core Entities
//! * [`element::ContractElement`]: A reusable building block (paragraph, image, input field).
//! * [`template::ContractTemplate`]: An ordered composition of element ids.
//! * [`contract::Contract`]: A signed instantiation of a template by an employee.
//!
//! ## Referenced Entities
//! * [`party::Employee`] and [`party::Company`]: foreign-key targets only.
//!
//! ## Value Objects
//! * [`ids`]: Integer newtypes so an element id can never be passed where a template id is expected.

pub mod contract;
pub mod element;
pub mod ids;
pub mod party;
pub mod template;
