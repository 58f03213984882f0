use anyhow::Context;
use clap::Subcommand;

use crate::pprint;
use crate::terminal::{format, print};
use pactum_common::config::Config;
use pactum_common::models::contract::{Contract, ContractData};
use pactum_common::models::ids::{ContractId, EmployeeId, TemplateId};
use pactum_common::views::ContractView;
use pactum_core::contracts::ContractDraft;
use pactum_core::engine::Engine;

#[derive(Subcommand)]
pub enum ContractCommand {
    /// List signed contracts
    #[command(alias = "ls")]
    List,
    /// Show a single contract
    Show { id: ContractId },
    /// Sign a template on behalf of an employee
    Create {
        #[arg(long)]
        employee: EmployeeId,
        #[arg(long)]
        template: TemplateId,
        /// JSON object keyed by input-field element id, e.g. '{"4":"Jane Doe"}'
        #[arg(long)]
        data: String,
    },
}

pub fn run(command: ContractCommand, engine: &Engine, cfg: &Config) -> anyhow::Result<()> {
    match command {
        ContractCommand::List => {
            let contracts = engine.contracts.list()?;
            print_contracts(&contracts, engine, cfg)?;
        }
        ContractCommand::Show { id } => {
            let contract = engine.contracts.get(id)?;
            print_contracts(std::slice::from_ref(&contract), engine, cfg)?;
        }
        ContractCommand::Create {
            employee,
            template,
            data,
        } => {
            let contract_data = parse_contract_data(&data)?;
            let contract = engine.contracts.create(ContractDraft {
                employee_id: employee,
                template_id: template,
                contract_data,
            })?;
            print_contracts(std::slice::from_ref(&contract), engine, cfg)?;
        }
    }
    Ok(())
}

/// Parse failures keep their `serde_json::Error` so the exit code reports bad input.
pub fn parse_contract_data(raw: &str) -> anyhow::Result<ContractData> {
    serde_json::from_str(raw).context("--data must be a JSON object of input-field values")
}

fn print_contracts(contracts: &[Contract], engine: &Engine, cfg: &Config) -> anyhow::Result<()> {
    if cfg.json {
        let views: Vec<ContractView> = contracts.iter().map(|c| engine.contracts.to_view(c)).collect();
        return print::json(&views);
    }

    print::header("contracts", cfg.quiet);
    if contracts.is_empty() {
        print::no_results("contracts");
        return Ok(());
    }

    for (idx, contract) in contracts.iter().enumerate() {
        print::tree_head(contract.id, "contract");
        if cfg.quiet < 2 {
            print::as_tree_one_level(format::contract_to_key_value_pair(contract));
        }
        if idx + 1 != contracts.len() {
            pprint!();
        }
    }
    print::end_of_program(cfg.quiet);
    Ok(())
}
