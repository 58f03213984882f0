use std::collections::{BTreeMap, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use pactum_common::error::StoreError;
use pactum_common::models::contract::{Contract, NewContract};
use pactum_common::models::element::{ContractElement, ElementType, NewElement};
use pactum_common::models::ids::{CompanyId, ContractId, ElementId, EmployeeId, TemplateId};
use pactum_common::models::party::{Company, Employee};
use pactum_common::models::template::{ContractTemplate, NewTemplate};
use pactum_common::store::{ContractStore, Directory, ElementStore, StoreResult, TemplateStore};

use crate::store::snapshot::Snapshot;

#[derive(Debug, Default)]
struct State {
    companies: BTreeMap<CompanyId, Company>,
    employees: BTreeMap<EmployeeId, Employee>,
    elements: BTreeMap<ElementId, ContractElement>,
    templates: BTreeMap<TemplateId, ContractTemplate>,
    contracts: BTreeMap<ContractId, Contract>,
    revision: u64,
}

/// Every store port over ordered maps behind a single lock.
///
/// Ids are assigned sequentially per entity, starting after the largest id
/// already present.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let state = State {
            companies: snapshot.companies.into_iter().map(|c| (c.id, c)).collect(),
            employees: snapshot.employees.into_iter().map(|e| (e.id, e)).collect(),
            elements: snapshot.elements.into_iter().map(|e| (e.id, e)).collect(),
            templates: snapshot.templates.into_iter().map(|t| (t.id, t)).collect(),
            contracts: snapshot.contracts.into_iter().map(|c| (c.id, c)).collect(),
            revision: 0,
        };
        Self {
            state: RwLock::new(state),
        }
    }

    pub fn snapshot(&self) -> StoreResult<Snapshot> {
        let state = self.read("taking a snapshot")?;
        Ok(Snapshot {
            companies: state.companies.values().cloned().collect(),
            employees: state.employees.values().cloned().collect(),
            elements: state.elements.values().cloned().collect(),
            templates: state.templates.values().cloned().collect(),
            contracts: state.contracts.values().cloned().collect(),
        })
    }

    /// Number of writes accepted since construction.
    pub fn revision(&self) -> StoreResult<u64> {
        Ok(self.read("reading the revision")?.revision)
    }

    pub fn add_company(&self, company: Company) -> StoreResult<()> {
        let mut state = self.write("adding a company")?;
        state.companies.insert(company.id, company);
        state.revision += 1;
        Ok(())
    }

    pub fn add_employee(&self, employee: Employee) -> StoreResult<()> {
        let mut state = self.write("adding an employee")?;
        state.employees.insert(employee.id, employee);
        state.revision += 1;
        Ok(())
    }

    fn read(&self, during: &'static str) -> StoreResult<RwLockReadGuard<'_, State>> {
        self.state.read().map_err(|_| StoreError::Poisoned(during))
    }

    fn write(&self, during: &'static str) -> StoreResult<RwLockWriteGuard<'_, State>> {
        self.state.write().map_err(|_| StoreError::Poisoned(during))
    }
}

fn next_id<K: Copy + Into<u64>, V>(map: &BTreeMap<K, V>, kind: &'static str) -> StoreResult<u64> {
    match map.keys().next_back() {
        None => Ok(1),
        Some(last) => {
            let last: u64 = (*last).into();
            last.checked_add(1).ok_or(StoreError::IdsExhausted(kind))
        }
    }
}

impl ElementStore for InMemoryStore {
    fn find_by_id(&self, id: ElementId) -> StoreResult<Option<ContractElement>> {
        Ok(self.read("reading elements")?.elements.get(&id).cloned())
    }

    fn find_by_ids(&self, ids: &[ElementId]) -> StoreResult<Vec<ContractElement>> {
        let wanted: HashSet<ElementId> = ids.iter().copied().collect();
        let state = self.read("reading elements")?;
        Ok(wanted
            .into_iter()
            .filter_map(|id| state.elements.get(&id).cloned())
            .collect())
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<ContractElement>> {
        let state = self.read("reading elements")?;
        Ok(state.elements.values().find(|e| e.name == name).cloned())
    }

    fn find_by_type(&self, element_type: ElementType) -> StoreResult<Vec<ContractElement>> {
        let state = self.read("reading elements")?;
        Ok(state
            .elements
            .values()
            .filter(|e| e.element_type() == element_type)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> StoreResult<Vec<ContractElement>> {
        Ok(self.read("reading elements")?.elements.values().cloned().collect())
    }

    fn insert(&self, element: NewElement) -> StoreResult<ContractElement> {
        let mut state = self.write("inserting an element")?;
        let element = element.with_id(ElementId(next_id(&state.elements, "element")?));
        state.elements.insert(element.id, element.clone());
        state.revision += 1;
        Ok(element)
    }

    fn update(&self, element: &ContractElement) -> StoreResult<()> {
        let mut state = self.write("updating an element")?;
        state.elements.insert(element.id, element.clone());
        state.revision += 1;
        Ok(())
    }
}

impl TemplateStore for InMemoryStore {
    fn find_by_id(&self, id: TemplateId) -> StoreResult<Option<ContractTemplate>> {
        Ok(self.read("reading templates")?.templates.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<ContractTemplate>> {
        let state = self.read("reading templates")?;
        Ok(state.templates.values().find(|t| t.name == name).cloned())
    }

    fn find_all(&self) -> StoreResult<Vec<ContractTemplate>> {
        Ok(self.read("reading templates")?.templates.values().cloned().collect())
    }

    fn insert(&self, template: NewTemplate) -> StoreResult<ContractTemplate> {
        let mut state = self.write("inserting a template")?;
        let template = template.with_id(TemplateId(next_id(&state.templates, "template")?));
        state.templates.insert(template.id, template.clone());
        state.revision += 1;
        Ok(template)
    }

    fn update(&self, template: &ContractTemplate) -> StoreResult<()> {
        let mut state = self.write("updating a template")?;
        state.templates.insert(template.id, template.clone());
        state.revision += 1;
        Ok(())
    }
}

impl ContractStore for InMemoryStore {
    fn find_by_id(&self, id: ContractId) -> StoreResult<Option<Contract>> {
        Ok(self.read("reading contracts")?.contracts.get(&id).cloned())
    }

    fn find_all(&self) -> StoreResult<Vec<Contract>> {
        Ok(self.read("reading contracts")?.contracts.values().cloned().collect())
    }

    fn insert(&self, contract: NewContract) -> StoreResult<Contract> {
        let mut state = self.write("inserting a contract")?;
        let contract = contract.with_id(ContractId(next_id(&state.contracts, "contract")?));
        state.contracts.insert(contract.id, contract.clone());
        state.revision += 1;
        Ok(contract)
    }
}

impl Directory for InMemoryStore {
    fn find_employee(&self, id: EmployeeId) -> StoreResult<Option<Employee>> {
        Ok(self.read("reading employees")?.employees.get(&id).cloned())
    }

    fn find_company(&self, id: CompanyId) -> StoreResult<Option<Company>> {
        Ok(self.read("reading companies")?.companies.get(&id).cloned())
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
