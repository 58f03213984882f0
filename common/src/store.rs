//! # Store Ports
//!
//! Repository traits the services depend on. Concrete adapters live in
//! `pactum-core` (`store::memory`), and any other backend only has to
//! implement these.
//!
//! Lookups return `Ok(None)` or an empty `Vec` for absent records. `Err`
//! is reserved for failures of the store itself.

use crate::error::StoreError;
use crate::models::contract::{Contract, NewContract};
use crate::models::element::{ContractElement, ElementType, NewElement};
use crate::models::ids::{CompanyId, ContractId, ElementId, EmployeeId, TemplateId};
use crate::models::party::{Company, Employee};
use crate::models::template::{ContractTemplate, NewTemplate};

pub type StoreResult<T> = Result<T, StoreError>;

pub trait ElementStore: Send + Sync {
    fn find_by_id(&self, id: ElementId) -> StoreResult<Option<ContractElement>>;

    /// Returns the stored elements whose id is in `ids`.
    ///
    /// Unknown ids are skipped and each element appears at most once. No
    /// ordering is promised.
    fn find_by_ids(&self, ids: &[ElementId]) -> StoreResult<Vec<ContractElement>>;

    fn find_by_name(&self, name: &str) -> StoreResult<Option<ContractElement>>;

    fn find_by_type(&self, element_type: ElementType) -> StoreResult<Vec<ContractElement>>;

    fn find_all(&self) -> StoreResult<Vec<ContractElement>>;

    fn insert(&self, element: NewElement) -> StoreResult<ContractElement>;

    /// Replaces the stored element with the same id.
    fn update(&self, element: &ContractElement) -> StoreResult<()>;
}

pub trait TemplateStore: Send + Sync {
    fn find_by_id(&self, id: TemplateId) -> StoreResult<Option<ContractTemplate>>;

    fn find_by_name(&self, name: &str) -> StoreResult<Option<ContractTemplate>>;

    fn find_all(&self) -> StoreResult<Vec<ContractTemplate>>;

    fn insert(&self, template: NewTemplate) -> StoreResult<ContractTemplate>;

    fn update(&self, template: &ContractTemplate) -> StoreResult<()>;
}

pub trait ContractStore: Send + Sync {
    fn find_by_id(&self, id: ContractId) -> StoreResult<Option<Contract>>;

    fn find_all(&self) -> StoreResult<Vec<Contract>>;

    fn insert(&self, contract: NewContract) -> StoreResult<Contract>;
}

/// Read-only access to employees and companies.
///
/// These are managed elsewhere. The engine only checks that references resolve.
pub trait Directory: Send + Sync {
    fn find_employee(&self, id: EmployeeId) -> StoreResult<Option<Employee>>;

    fn find_company(&self, id: CompanyId) -> StoreResult<Option<Company>>;
}
