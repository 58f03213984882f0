pub mod contracts;
pub mod elements;
pub mod templates;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use pactum_common::config::DEFAULT_STORE_PATH;

#[derive(Parser)]
#[command(name = "pactum")]
#[command(about = "Compose contract templates and sign contracts.")]
#[command(version)]
pub struct CommandLine {
    /// Snapshot file holding every stored entity
    #[arg(long, global = true, env = "PACTUM_STORE", default_value = DEFAULT_STORE_PATH)]
    pub store: PathBuf,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Lower output (repeatable)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Print raw JSON views
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage the shared element catalog
    #[command(alias = "e", subcommand)]
    Elements(elements::ElementCommand),
    /// Compose and inspect contract templates
    #[command(alias = "t", subcommand)]
    Templates(templates::TemplateCommand),
    /// Sign and inspect contracts
    #[command(alias = "c", subcommand)]
    Contracts(contracts::ContractCommand),
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
