//! Configuration file support.
//!
//! A YAML file can supply default variant and setup strings, used whenever
//! they are not given on the command line:
//!
//! ```yaml
//! variants: "router:1.0,1.1,switch:2.0"
//! variant_setup: "win:C\\:\\App"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{KaleidoError, Result};

/// Defaults read from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KaleidoConfig {
    /// Default variant specification (same grammar as `--variant`).
    #[serde(default, alias = "VARIANTS")]
    pub variants: Option<String>,
    /// Default setup string (same grammar as `--variant-setup`).
    #[serde(default, alias = "VARIANT_SETUP")]
    pub variant_setup: Option<String>,
}

impl KaleidoConfig {
    /// Parses configuration text. `name` labels the source in diagnostics.
    ///
    /// An empty document is an empty configuration.
    pub fn from_yaml_str(source: &str, name: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|e| KaleidoError::config_parse(e, name, source))
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| KaleidoError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&source, &path.display().to_string())?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}
