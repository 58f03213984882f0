//! # Validation
//!
//! Both validators stop at the first violated rule and report only that one.
//!
//! * [`template::TemplateValidator`]: structural rules for an ordered element-id sequence.
//! * [`contract_data::ContractDataValidator`]: submitted values against a template's input fields.

pub mod contract_data;
pub mod template;

pub use contract_data::ContractDataValidator;
pub use template::TemplateValidator;
