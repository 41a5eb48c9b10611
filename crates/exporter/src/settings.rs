//! Export settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_destination() -> PathBuf {
    PathBuf::from("stardis_export")
}

/// Settings for the command-line run. Every field has a default, so a partial
/// JSON file (or none at all) is fine. The output layout itself (`model.txt`,
/// ASCII `<name>.stl`) is fixed and not configurable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Destination directory when `--out` is not given
    #[serde(default = "default_destination")]
    pub destination: PathBuf,
    /// Treat any skipped object or record as a failed run
    #[serde(default)]
    pub strict: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            destination: default_destination(),
            strict: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ExportSettings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
