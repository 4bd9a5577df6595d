//! Transient per-service payload staging.
//!
//! Each service gets its own temporary directory holding one file per key.
//! Storage is released by [`BlobStore::close`], which logs removal failures
//! instead of returning them, or silently on drop.

use std::collections::BTreeMap;
use std::path::Path;

use tempfile::TempDir;
use tracing::{debug, warn};

use crate::error::{GenerateError, Result};

const TEMP_PREFIX: &str = "schema_bin";

/// Keyed byte payloads grouped by service.
#[derive(Debug, Default)]
pub struct BlobStore {
    services: BTreeMap<String, TempDir>,
}

impl BlobStore {
    /// Creates an empty store. No storage is allocated until the first
    /// [`store`](Self::store).
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `bytes` under (`service`, `key`), replacing any earlier payload
    /// with the same key.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Io`] if the service directory cannot be
    /// created or the payload cannot be written.
    pub fn store(&mut self, service: &str, key: &str, bytes: &[u8]) -> Result<()> {
        if !self.services.contains_key(service) {
            let dir = tempfile::Builder::new()
                .prefix(TEMP_PREFIX)
                .tempdir()
                .map_err(GenerateError::io(&std::env::temp_dir()))?;
            debug!(service, dir = %dir.path().display(), "created staging directory");
            self.services.insert(service.to_string(), dir);
        }
        let dir = &self.services[service];

        let path = dir.path().join(key);
        if path.exists() {
            warn!(service, key, "duplicate schema name in service, later file wins");
        }
        std::fs::write(&path, bytes).map_err(GenerateError::io(&path))
    }

    /// Returns the service names in sorted order.
    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    /// Returns the number of services with at least one payload.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Reads back a single payload.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Io`] if the payload exists but cannot be read.
    pub fn read(&self, service: &str, key: &str) -> Result<Option<Vec<u8>>> {
        let Some(dir) = self.services.get(service) else {
            return Ok(None);
        };
        let path = dir.path().join(key);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(GenerateError::io(&path)(err)),
        }
    }

    /// Reads back every payload of `service`, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Io`] if the staging directory cannot be
    /// listed or a payload cannot be read.
    pub fn entries(&self, service: &str) -> Result<BTreeMap<String, Vec<u8>>> {
        let mut entries = BTreeMap::new();
        let Some(dir) = self.services.get(service) else {
            return Ok(entries);
        };
        let root = dir.path();
        for entry in std::fs::read_dir(root).map_err(GenerateError::io(root))? {
            let path = entry.map_err(GenerateError::io(root))?.path();
            let key = key_of(&path);
            let bytes = std::fs::read(&path).map_err(GenerateError::io(&path))?;
            entries.insert(key, bytes);
        }
        Ok(entries)
    }

    /// Removes all staging directories.
    ///
    /// Failures are logged and otherwise ignored so they never mask the
    /// outcome of the run.
    pub fn close(self) {
        for (service, dir) in self.services {
            let path = dir.path().to_path_buf();
            if let Err(err) = dir.close() {
                warn!(service = %service, dir = %path.display(), error = %err, "cannot remove tmp dir");
            }
        }
    }
}

fn key_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
