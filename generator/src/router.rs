//! Service assignment for resolved schemas.

use std::path::{Path, PathBuf};

use crate::config::Policy;
use crate::error::Result;
use crate::store::BlobStore;

/// Files resolved schemas under their service in a [`BlobStore`].
///
/// Under [`Policy::Separate`] the service is the basename of the schema's
/// parent directory; under [`Policy::Merge`] every schema goes to the run's
/// package. The key is the file name without `.json`.
#[derive(Debug)]
pub struct PartitionRouter {
    policy: Policy,
    package: String,
    store: BlobStore,
    routed: usize,
}

impl PartitionRouter {
    /// Creates a router with an empty store.
    pub fn new(policy: Policy, package: impl Into<String>) -> Self {
        Self {
            policy,
            package: package.into(),
            store: BlobStore::new(),
            routed: 0,
        }
    }

    /// Returns the service `origin` belongs to.
    ///
    /// ```
    /// use schemagen::{PartitionRouter, Policy};
    /// use std::path::Path;
    ///
    /// let origin = Path::new("/schemas/users/create.json");
    /// assert_eq!(PartitionRouter::new(Policy::Separate, "api").service_for(origin), "users");
    /// assert_eq!(PartitionRouter::new(Policy::Merge, "api").service_for(origin), "api");
    /// ```
    pub fn service_for(&self, origin: &Path) -> String {
        match self.policy {
            Policy::Merge => self.package.clone(),
            Policy::Separate => origin
                .parent()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.package.clone()),
        }
    }

    /// Stores `bytes` under the service and key derived from `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Io`](crate::GenerateError::Io) if staging
    /// fails.
    pub fn route(&mut self, origin: &Path, bytes: &[u8]) -> Result<()> {
        let service = self.service_for(origin);
        let key = key_for(origin);
        tracing::debug!(origin = %origin.display(), service = %service, key = %key, "routed schema");
        self.store.store(&service, &key, bytes)?;
        self.routed += 1;
        Ok(())
    }

    /// Returns the grouping policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Returns the package name used under [`Policy::Merge`].
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Returns how many schemas were routed, counting overwritten ones.
    pub fn routed(&self) -> usize {
        self.routed
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &BlobStore {
        &self.store
    }

    /// Consumes the router, yielding its store.
    pub fn into_store(self) -> BlobStore {
        self.store
    }
}

/// Returns the lookup key for a schema file: its name without `.json`.
pub fn key_for(origin: &Path) -> String {
    let name = origin
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.strip_suffix(".json") {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// Returns the directory a service's sources are written to.
///
/// The output directory itself is used under [`Policy::Merge`] or when the
/// service is named like the output directory; otherwise a subdirectory named
/// after the service.
pub fn service_dir(output: &Path, service: &str, policy: Policy) -> PathBuf {
    let same_name = output
        .file_name()
        .is_some_and(|name| name.to_string_lossy() == service);
    if policy == Policy::Merge || same_name {
        output.to_path_buf()
    } else {
        output.join(service)
    }
}
