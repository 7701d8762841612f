//! Runtime configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATA_DIR: &str = "satchel-data";

/// Configuration values controlling where state lives and how a fresh store
/// is initialized.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SATCHEL")]
pub struct SatchelSettings {
    /// Directory holding the durable store.
    pub data_dir: Option<PathBuf>,
    /// Leave a fresh store empty instead of seeding the stock inventory.
    #[ortho_config(default = false)]
    pub skip_seeding: bool,
}

impl SatchelSettings {
    /// Return the configured data directory, falling back to the default.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Whether the stock inventory is seeded into a fresh store.
    pub fn seeds_defaults(&self) -> bool {
        !self.skip_seeding
    }
}
