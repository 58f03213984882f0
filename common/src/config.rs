use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = "pactum.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Snapshot file holding every stored entity between runs.
    pub store_path: PathBuf,
    /// 0 prints everything, 1 drops headers, 2 prints errors only.
    pub quiet: u8,
    /// Emit raw JSON views instead of the formatted listing.
    ///
    /// Logging still goes to stderr, so stdout stays machine readable.
    pub json: bool,
}
