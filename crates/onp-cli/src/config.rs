use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::{OutputFormat, Unit};
use crate::error::{ConfigError, ConfigResult};

/// Defaults for every command, optionally loaded from a TOML file.
///
/// Missing keys fall back to [`CliConfig::default`]; command-line flags
/// override whatever the file sets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Unit of comparison when `--unit` is not given.
    pub unit: Unit,
    /// Context tokens around each hunk when `-U` is not given.
    pub context: usize,
    /// Whether unified output is colored.
    pub color: bool,
    /// Output format when `--format` is not given.
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Lines,
            context: 3,
            color: true,
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn resolve(path: Option<&Path>) -> ConfigResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
