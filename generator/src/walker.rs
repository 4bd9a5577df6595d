//! Depth-first traversal of a schema tree.
//!
//! The pool loaded at the root of the walk is the only scope a single walk
//! ever resolves against. A subdirectory that owns its own definitions file
//! starts an independent scope: the walk skips it entirely, and it is
//! expected to be generated by its own invocation (see
//! [`plan_units`](crate::plan_units)).

use std::fs;
use std::path::{Path, PathBuf};

use schemagen_core::{DEFINITIONS_KEY, DefinitionPool, resolve, scan_references};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::{GenerateError, Result};
use crate::router::PartitionRouter;

/// Loads the definitions file of `dir`, if there is one.
///
/// A missing file is not an error: the walk proceeds without a pool and only
/// fails if a schema references a definition.
///
/// # Errors
///
/// Returns [`GenerateError::Pool`] if the file exists but cannot be read, is
/// not valid JSON, or lacks a `definitions` object.
pub fn load_scope(dir: &Path, definitions_file: &str) -> Result<Option<DefinitionPool>> {
    match DefinitionPool::load(dir.join(definitions_file)) {
        Ok(pool) => {
            debug!(dir = %dir.display(), definitions = pool.len(), "loaded definitions");
            Ok(Some(pool))
        }
        Err(err) if err.is_not_found() => {
            warn!(dir = %dir.display(), "cannot read {definitions_file}, schemas with $ref will fail");
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Returns `true` if `dir` holds a regular `definitions_file`, following
/// symlinks. Such a directory starts its own scope.
pub(crate) fn owns_definitions(dir: &Path, definitions_file: &str) -> bool {
    dir.join(definitions_file).is_file()
}

/// Injects the definitions `document` references under its `definitions`
/// key. Only the document's own `$ref`s are collected; references inside the
/// injected bodies are left as they are.
///
/// # Errors
///
/// Returns [`GenerateError::SchemaHasDefinitions`] if the document already
/// has the key, or [`GenerateError::Resolve`] if a referenced definition
/// cannot be supplied by `pool`.
pub fn resolve_document(
    mut document: Map<String, Value>,
    pool: Option<&DefinitionPool>,
    origin: &Path,
) -> Result<Map<String, Value>> {
    if document.contains_key(DEFINITIONS_KEY) {
        return Err(GenerateError::SchemaHasDefinitions(origin.to_path_buf()));
    }

    let refs = scan_references(&document);
    let closure = resolve(pool, &refs).map_err(|source| GenerateError::Resolve {
        path: origin.to_path_buf(),
        source,
    })?;

    document.insert(DEFINITIONS_KEY.to_string(), Value::Object(closure));
    Ok(document)
}

/// The scope active for a subtree: where it was established and its pool.
#[derive(Debug, Clone, Copy)]
struct Scope<'a> {
    definitions: &'a Path,
    pool: Option<&'a DefinitionPool>,
}

/// Walks one schema tree, resolving every schema file against the root pool
/// and handing the results to a [`PartitionRouter`].
#[derive(Debug)]
pub struct ScopeWalker<'a> {
    definitions_file: &'a str,
}

impl<'a> ScopeWalker<'a> {
    /// Creates a walker recognising `definitions_file` as the pool source.
    pub fn new(definitions_file: &'a str) -> Self {
        Self { definitions_file }
    }

    /// Walks `root`, routing each resolved schema. Returns how many schema
    /// files were resolved.
    ///
    /// # Errors
    ///
    /// Aborts on the first read, parse, resolution or routing failure.
    pub fn walk(
        &self,
        root: &Path,
        pool: Option<&DefinitionPool>,
        router: &mut PartitionRouter,
    ) -> Result<usize> {
        let definitions = root.join(self.definitions_file);
        let scope = Scope {
            definitions: &definitions,
            pool,
        };
        self.walk_dir(root, scope, router)
    }

    fn walk_dir(&self, dir: &Path, scope: Scope<'_>, router: &mut PartitionRouter) -> Result<usize> {
        let mut entries: Vec<(PathBuf, bool)> = Vec::new();
        for entry in fs::read_dir(dir).map_err(GenerateError::io(dir))? {
            let entry = entry.map_err(GenerateError::io(dir))?;
            let file_type = entry.file_type().map_err(GenerateError::io(&entry.path()))?;
            entries.push((entry.path(), file_type.is_dir()));
        }
        entries.sort();

        let mut resolved = 0;
        for (path, is_dir) in entries {
            if is_dir {
                if self.owns_scope(&path, scope) {
                    info!(dir = %path.display(), "skipping subtree with its own {}", self.definitions_file);
                    continue;
                }
                resolved += self.walk_dir(&path, scope, router)?;
            } else if self.is_schema_file(&path) {
                self.visit_schema(&path, scope, router)?;
                resolved += 1;
            }
        }
        Ok(resolved)
    }

    fn owns_scope(&self, dir: &Path, scope: Scope<'_>) -> bool {
        owns_definitions(dir, self.definitions_file)
            && dir.join(self.definitions_file) != scope.definitions
    }

    fn is_schema_file(&self, path: &Path) -> bool {
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let is_definitions = path
            .file_name()
            .is_some_and(|name| name == self.definitions_file);
        is_json && !is_definitions
    }

    fn visit_schema(&self, path: &Path, scope: Scope<'_>, router: &mut PartitionRouter) -> Result<()> {
        let raw = fs::read(path).map_err(GenerateError::io(path))?;
        let value: Value = serde_json::from_slice(&raw).map_err(|source| GenerateError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let Value::Object(document) = value else {
            return Err(GenerateError::SchemaNotObject(path.to_path_buf()));
        };

        let resolved = resolve_document(document, scope.pool, path)?;
        let bytes = serde_json::to_vec(&resolved).map_err(|source| GenerateError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "resolved schema");
        router.route(path, &bytes)
    }
}
