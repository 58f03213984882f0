use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::ids::{ContractId, EmployeeId, TemplateId};

/// Submitted input-field values keyed by the stringified element id.
pub type ContractData = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub employee_id: EmployeeId,
    pub template_id: TemplateId,
    pub contract_data: ContractData,
    pub signed_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewContract {
    pub employee_id: EmployeeId,
    pub template_id: TemplateId,
    pub contract_data: ContractData,
    pub signed_date: NaiveDate,
}

impl NewContract {
    pub fn with_id(self, id: ContractId) -> Contract {
        Contract {
            id,
            employee_id: self.employee_id,
            template_id: self.template_id,
            contract_data: self.contract_data,
            signed_date: self.signed_date,
        }
    }
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` count as empty.
pub fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
