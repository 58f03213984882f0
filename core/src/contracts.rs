//! # Contract Service
//!
//! Signs a template on behalf of an employee. A contract is written once
//! and never updated.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use pactum_common::error::{Entity, PactumError, Result};
use pactum_common::models::contract::{Contract, ContractData, NewContract};
use pactum_common::models::ids::{ContractId, EmployeeId, TemplateId};
use pactum_common::store::{ContractStore, Directory, ElementStore, TemplateStore};
use pactum_common::views::ContractView;

use crate::clock::Clock;
use crate::validation::ContractDataValidator;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContractDraft {
    pub employee_id: EmployeeId,
    pub template_id: TemplateId,
    pub contract_data: ContractData,
}

pub struct ContractService {
    contracts: Arc<dyn ContractStore>,
    templates: Arc<dyn TemplateStore>,
    directory: Arc<dyn Directory>,
    data_validator: ContractDataValidator,
    clock: Arc<dyn Clock>,
}

impl ContractService {
    pub fn new(
        contracts: Arc<dyn ContractStore>,
        templates: Arc<dyn TemplateStore>,
        elements: Arc<dyn ElementStore>,
        directory: Arc<dyn Directory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            contracts,
            templates,
            directory,
            data_validator: ContractDataValidator::new(elements),
            clock,
        }
    }

    pub fn create(&self, draft: ContractDraft) -> Result<Contract> {
        let employee = self
            .directory
            .find_employee(draft.employee_id)?
            .ok_or_else(|| PactumError::not_found(Entity::Employee, draft.employee_id.get()))?;
        if self.directory.find_company(employee.company_id)?.is_none() {
            return Err(PactumError::not_found(Entity::Company, employee.company_id.get()));
        }
        let template = self
            .templates
            .find_by_id(draft.template_id)?
            .ok_or_else(|| PactumError::not_found(Entity::Template, draft.template_id.get()))?;

        self.data_validator
            .validate(&template, &draft.contract_data)
            .inspect_err(|err| warn!(template = %template.id, %err, "Rejected contract data"))?;

        let contract = self.contracts.insert(NewContract {
            employee_id: draft.employee_id,
            template_id: draft.template_id,
            contract_data: draft.contract_data,
            signed_date: self.clock.today(),
        })?;
        info!(
            id = %contract.id,
            employee = %contract.employee_id,
            template = %contract.template_id,
            "Signed contract"
        );
        Ok(contract)
    }

    pub fn get(&self, id: ContractId) -> Result<Contract> {
        self.contracts
            .find_by_id(id)?
            .ok_or_else(|| PactumError::not_found(Entity::Contract, id.get()))
    }

    pub fn list(&self) -> Result<Vec<Contract>> {
        Ok(self.contracts.find_all()?)
    }

    pub fn to_view(&self, contract: &Contract) -> ContractView {
        ContractView::from(contract)
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
