//! Generation settings.
//!
//! Every field has a default; a file only lists the settings it changes.
//!
//! # Example YAML
//!
//! ```yaml
//! policy: separate
//! jobs: 4
//! definitions_file: definitions.json
//! artifact_file: schema.rs
//! loader_file: bind.rs
//! search_path_var: SCHEMAGEN_PATH
//! nested_scopes: true
//! ```

use std::io::{BufReader, BufWriter};
use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How resolved schemas are grouped into services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// One service per run, named after the output directory.
    #[default]
    Merge,
    /// One service per schema parent directory.
    Separate,
}

/// Settings for one generation run.
///
/// # Examples
///
/// ```
/// use schemagen::{GenerateConfig, Policy};
///
/// let config: GenerateConfig = serde_yaml::from_str("policy: separate").unwrap();
/// assert_eq!(config.policy, Policy::Separate);
/// assert_eq!(config.definitions_file, "definitions.json");
/// assert_eq!(config.loader_file, "bind.rs");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Service grouping policy.
    pub policy: Policy,
    /// Worker count for parallel emission and multi-unit runs
    /// (`None` = available parallelism).
    pub jobs: Option<usize>,
    /// File name of the per-directory definitions document.
    pub definitions_file: String,
    /// File name of the generated payload table.
    pub artifact_file: String,
    /// File name of the generated loader.
    pub loader_file: String,
    /// Environment variable listing glob-mode search roots.
    pub search_path_var: String,
    /// Also generate every nested subtree that owns a definitions file.
    pub nested_scopes: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            policy: Policy::Merge,
            jobs: None,
            definitions_file: "definitions.json".to_string(),
            artifact_file: "schema.rs".to_string(),
            loader_file: "bind.rs".to_string(),
            search_path_var: "SCHEMAGEN_PATH".to_string(),
            nested_scopes: false,
        }
    }
}

impl GenerateConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::GenerateError::Io) if the file cannot be read,
    /// or [`Config`](crate::GenerateError::Config) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(crate::GenerateError::io(path))?;
        let config = serde_yaml::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Io`](crate::GenerateError::Io) if the file cannot be
    /// written, or [`Config`](crate::GenerateError::Config) if serialization
    /// fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(crate::GenerateError::io(path))?;
        serde_yaml::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Returns the worker count to use, never zero.
    pub fn effective_jobs(&self) -> usize {
        match self.jobs {
            Some(jobs) if jobs > 0 => jobs,
            _ => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}
