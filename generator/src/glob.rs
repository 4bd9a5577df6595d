//! Multi-root discovery driven by an environment search path.
//!
//! Each search root is expected to hold a `schema/` tree mirrored by a `src/`
//! tree. Every schema directory owning a definitions file whose mirror exists
//! under `src/` becomes one [`Unit`].

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::GenerateConfig;
use crate::error::Result;
use crate::generate::{GenerateSummary, Generator, Unit, scope_roots};

/// Subdirectory of a search root holding schema trees.
pub const SCHEMA_DIR: &str = "schema";
/// Subdirectory of a search root receiving generated sources.
pub const SOURCE_DIR: &str = "src";

/// Splits the search path held by `var` into its non-empty roots.
///
/// Uses the platform path-list separator (`:` on Unix, `;` on Windows).
/// An unset variable yields no roots.
pub fn search_roots(var: &str) -> Vec<PathBuf> {
    std::env::var_os(var)
        .map(|paths| {
            std::env::split_paths(&paths)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Lists the units of one search root, sorted by path.
///
/// A root without both `schema/` and `src/` contributes nothing.
///
/// # Errors
///
/// Returns [`GenerateError::Io`](crate::GenerateError::Io) if the schema
/// tree cannot be listed.
pub fn discover_units(root: &Path, definitions_file: &str) -> Result<Vec<Unit>> {
    let schema = root.join(SCHEMA_DIR);
    let source = root.join(SOURCE_DIR);
    if !schema.is_dir() || !source.is_dir() {
        debug!(root = %root.display(), "search root has no schema/src pair");
        return Ok(Vec::new());
    }

    let units = scope_roots(&schema, definitions_file)?
        .into_iter()
        .filter(|rel| source.join(rel).is_dir())
        .map(|rel| Unit {
            input: schema.join(&rel),
            output: source.join(&rel),
        })
        .collect();
    Ok(units)
}

/// Lists the units of every root on the configured search path.
///
/// # Errors
///
/// Returns the first listing error.
pub fn glob_units(config: &GenerateConfig) -> Result<Vec<Unit>> {
    let mut units = Vec::new();
    for root in search_roots(&config.search_path_var) {
        units.extend(discover_units(&root, &config.definitions_file)?);
    }
    info!(units = units.len(), var = %config.search_path_var, "discovered schema trees");
    Ok(units)
}

impl Generator {
    /// Generates every unit found on the configured search path.
    ///
    /// # Errors
    ///
    /// Returns a discovery error, or the last unit error once all units ran.
    pub fn generate_glob(&self) -> Result<Vec<GenerateSummary>> {
        let units = glob_units(self.config())?;
        self.run_units(&units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_discover_units_requires_mirror() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "schema/org/api/definitions.json", r#"{"definitions": {}}"#);
        write(root.path(), "schema/org/api/users/create.json", "{}");
        write(root.path(), "schema/org/orphan/definitions.json", r#"{"definitions": {}}"#);
        fs::create_dir_all(root.path().join("src/org/api")).unwrap();

        let units = discover_units(root.path(), "definitions.json").unwrap();
        assert_eq!(
            units,
            vec![Unit {
                input: root.path().join("schema/org/api"),
                output: root.path().join("src/org/api"),
            }]
        );
    }

    #[test]
    fn test_discover_units_includes_schema_root() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "schema/definitions.json", r#"{"definitions": {}}"#);
        write(root.path(), "schema/nested/definitions.json", r#"{"definitions": {}}"#);
        fs::create_dir_all(root.path().join("src/nested")).unwrap();

        let units = discover_units(root.path(), "definitions.json").unwrap();
        let inputs: Vec<PathBuf> = units.into_iter().map(|u| u.input).collect();
        assert_eq!(
            inputs,
            vec![root.path().join("schema"), root.path().join("schema/nested")]
        );
    }

    #[test]
    fn test_root_without_pair_is_ignored() {
        let root = tempfile::tempdir().unwrap();
        write(root.path(), "schema/definitions.json", r#"{"definitions": {}}"#);
        assert!(discover_units(root.path(), "definitions.json").unwrap().is_empty());
    }

    #[test]
    fn test_search_roots_unset() {
        assert!(search_roots("SCHEMAGEN_TEST_UNSET_SEARCH_PATH").is_empty());
    }
}
