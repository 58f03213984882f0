mod commands;
mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use commands::{CommandLine, Commands, contracts, elements, templates};
use pactum_common::config::Config;
use pactum_common::error::{ErrorCategory, PactumError};
use pactum_core::engine::Engine;
use pactum_core::store::{InMemoryStore, snapshot};
use terminal::logging;
use tracing::{debug, error};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg = Config {
        store_path: commands.store,
        quiet: commands.quiet,
        json: commands.json,
    };

    match run(commands.command, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(command: Commands, cfg: &Config) -> anyhow::Result<()> {
    let store = Arc::new(InMemoryStore::from_snapshot(snapshot::load(&cfg.store_path)?));
    let before: u64 = store.revision()?;
    let engine = Engine::new(store.clone());

    match command {
        Commands::Elements(command) => elements::run(command, &engine, cfg)?,
        Commands::Templates(command) => templates::run(command, &engine, cfg)?,
        Commands::Contracts(command) => contracts::run(command, &engine, cfg)?,
    }

    if store.revision()? != before {
        snapshot::save(&cfg.store_path, &store.snapshot()?)?;
    } else {
        debug!("Nothing changed, snapshot left untouched");
    }
    Ok(())
}

/// 2 for bad input, 3 for missing records, 4 for name clashes, 1 otherwise.
///
/// Malformed `--data` arrives as a bare `serde_json::Error`. A malformed
/// snapshot is wrapped in `StoreError` and stays internal.
fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<serde_json::Error>().is_some() {
        return 2;
    }
    match err.downcast_ref::<PactumError>().map(PactumError::category) {
        Some(ErrorCategory::BadRequest) => 2,
        Some(ErrorCategory::NotFound) => 3,
        Some(ErrorCategory::Conflict) => 4,
        Some(ErrorCategory::Internal) | None => 1,
    }
}
