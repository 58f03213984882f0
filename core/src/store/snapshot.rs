//! # JSON Snapshots
//!
//! The CLI keeps state between runs as one JSON document. Saving writes a
//! sibling temporary file and renames it over the target, so a crash never
//! leaves a half-written snapshot behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use pactum_common::error::StoreError;
use pactum_common::models::contract::Contract;
use pactum_common::models::element::ContractElement;
use pactum_common::models::party::{Company, Employee};
use pactum_common::models::template::ContractTemplate;
use pactum_common::store::StoreResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub companies: Vec<Company>,
    pub employees: Vec<Employee>,
    pub elements: Vec<ContractElement>,
    pub templates: Vec<ContractTemplate>,
    pub contracts: Vec<Contract>,
}

/// Reads a snapshot, treating a missing file as an empty store.
pub fn load(path: &Path) -> StoreResult<Snapshot> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "No snapshot found, starting empty");
            return Ok(Snapshot::default());
        }
        Err(err) => return Err(StoreError::Io(err)),
    };
    let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        elements = snapshot.elements.len(),
        templates = snapshot.templates.len(),
        contracts = snapshot.contracts.len(),
        "Loaded snapshot"
    );
    Ok(snapshot)
}

pub fn save(path: &Path, snapshot: &Snapshot) -> StoreResult<()> {
    let tmp = temporary_path(path);
    {
        let mut writer = BufWriter::new(File::create(&tmp)?);
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), "Saved snapshot");
    Ok(())
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "pactum.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
