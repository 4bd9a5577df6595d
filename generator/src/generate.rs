//! Generation runs: resolve a tree, then emit every service it produced.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::config::GenerateConfig;
use crate::emit::emit_service;
use crate::error::{GenerateError, Result};
use crate::router::{PartitionRouter, service_dir};
use crate::store::BlobStore;
use crate::walker::{ScopeWalker, load_scope, owns_definitions};

/// One independent generation: an input tree and its output directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Unit {
    /// Schema tree root.
    pub input: PathBuf,
    /// Directory receiving generated sources.
    pub output: PathBuf,
}

/// Outcome of a successful unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Absolute input directory.
    pub input: PathBuf,
    /// Absolute output directory.
    pub output: PathBuf,
    /// Emitted services, sorted.
    pub services: Vec<String>,
    /// Schema files resolved.
    pub schemas: usize,
}

/// Runs generation units according to a [`GenerateConfig`].
///
/// # Examples
///
/// ```no_run
/// use schemagen::{GenerateConfig, Generator, Policy};
///
/// let config = GenerateConfig {
///     policy: Policy::Separate,
///     ..GenerateConfig::default()
/// };
/// let summary = Generator::new(config).generate("schema/api", "src/api").unwrap();
/// println!("{} service(s)", summary.services.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GenerateConfig,
}

impl Generator {
    /// Creates a generator.
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Resolves every schema under `input` and stages it by service.
    ///
    /// `package` names the single service produced under
    /// [`Policy::Merge`](crate::Policy::Merge). Subtrees owning their own
    /// definitions file are skipped. On error, staged payloads are released
    /// before returning.
    ///
    /// # Errors
    ///
    /// Returns the first definitions, read, parse, resolution or staging
    /// error.
    pub fn stage(&self, input: &Path, package: &str) -> Result<PartitionRouter> {
        let pool = load_scope(input, &self.config.definitions_file)?;
        let mut router = PartitionRouter::new(self.config.policy, package);
        let walker = ScopeWalker::new(&self.config.definitions_file);

        match walker.walk(input, pool.as_ref(), &mut router) {
            Ok(count) => {
                debug!(input = %input.display(), schemas = count, "staged schema tree");
                Ok(router)
            }
            Err(err) => {
                router.into_store().close();
                Err(err)
            }
        }
    }

    /// Generates one tree into `output`, emitting services in parallel.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidInput`] if `input` is not a directory or
    /// `output` has no name, and otherwise any staging or emission error.
    pub fn generate(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<GenerateSummary> {
        let unit = Unit {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
        };
        self.thread_pool()?.install(|| self.run_unit(&unit))
    }

    /// Generates `input` and, when `nested_scopes` is set, every nested
    /// subtree owning its own definitions file (see [`plan_units`]).
    ///
    /// # Errors
    ///
    /// Returns the last unit error; other units still run.
    pub fn generate_tree(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<Vec<GenerateSummary>> {
        let units = plan_units(input.as_ref(), output.as_ref(), &self.config)?;
        self.run_units(&units)
    }

    /// Runs independent units on a worker pool sized by the configuration.
    ///
    /// A failing unit does not stop the others; the last error observed is
    /// returned once all have finished.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ThreadPool`] if the pool cannot start, or the
    /// last unit error.
    pub fn run_units(&self, units: &[Unit]) -> Result<Vec<GenerateSummary>> {
        let outcomes: Vec<Result<GenerateSummary>> = self
            .thread_pool()?
            .install(|| units.par_iter().map(|unit| self.run_unit(unit)).collect());

        let mut summaries = Vec::with_capacity(outcomes.len());
        let mut last_error = None;
        for outcome in outcomes {
            match outcome {
                Ok(summary) => summaries.push(summary),
                Err(err) => {
                    error!(error = %err, "generation unit failed");
                    last_error = Some(err);
                }
            }
        }
        match last_error {
            Some(err) => Err(err),
            None => Ok(summaries),
        }
    }

    fn thread_pool(&self) -> Result<rayon::ThreadPool> {
        Ok(rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.effective_jobs())
            .build()?)
    }

    fn run_unit(&self, unit: &Unit) -> Result<GenerateSummary> {
        let input = absolute(&unit.input)?;
        let output = absolute(&unit.output)?;
        if !input.is_dir() {
            return Err(GenerateError::InvalidInput(format!(
                "input '{}' is not a directory",
                input.display()
            )));
        }
        let package = output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                GenerateError::InvalidInput(format!("output '{}' has no name", output.display()))
            })?;

        let router = self.stage(&input, &package)?;
        let schemas = router.routed();
        let store = router.into_store();
        let result = self.flush(&store, &output);
        store.close();
        let services = result?;

        info!(
            input = %input.display(),
            output = %output.display(),
            services = services.len(),
            schemas,
            "generated schema sources"
        );
        Ok(GenerateSummary {
            input,
            output,
            services,
            schemas,
        })
    }

    /// Emits every staged service; services are independent and run in
    /// parallel, the files of one service are written in sequence.
    fn flush(&self, store: &BlobStore, output: &Path) -> Result<Vec<String>> {
        let services: Vec<&str> = store.services().collect();
        let outcomes: Vec<Result<()>> = services
            .par_iter()
            .map(|service| {
                let entries = store.entries(service)?;
                let dir = service_dir(output, service, self.config.policy);
                emit_service(service, &entries, &dir, &self.config)
            })
            .collect();

        let mut last_error = None;
        for outcome in outcomes {
            if let Err(err) = outcome {
                last_error = Some(err);
            }
        }
        match last_error {
            Some(err) => Err(err),
            None => Ok(services.into_iter().map(str::to_string).collect()),
        }
    }
}

/// Lists the units needed to generate `input` completely.
///
/// The first unit is always `input` itself. With `nested_scopes` enabled,
/// every descendant directory owning a definitions file follows, its output
/// mirrored at the same relative path under `output`.
///
/// # Errors
///
/// Returns [`GenerateError::Io`] if a directory cannot be listed.
pub fn plan_units(input: &Path, output: &Path, config: &GenerateConfig) -> Result<Vec<Unit>> {
    let mut units = vec![Unit {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
    }];
    if config.nested_scopes {
        for rel in scope_roots(input, &config.definitions_file)? {
            if rel.as_os_str().is_empty() {
                continue;
            }
            units.push(Unit {
                input: input.join(&rel),
                output: output.join(&rel),
            });
        }
    }
    Ok(units)
}

/// Returns, relative to `root` and sorted, every directory at or below
/// `root` that owns `definitions_file`. The root itself appears as an empty
/// path.
pub(crate) fn scope_roots(root: &Path, definitions_file: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect_scope_roots(root, Path::new(""), definitions_file, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect_scope_roots(
    root: &Path,
    rel: &Path,
    definitions_file: &str,
    found: &mut Vec<PathBuf>,
) -> Result<()> {
    let dir = root.join(rel);
    if owns_definitions(&dir, definitions_file) {
        found.push(rel.to_path_buf());
    }
    for entry in std::fs::read_dir(&dir).map_err(GenerateError::io(&dir))? {
        let entry = entry.map_err(GenerateError::io(&dir))?;
        if entry.file_type().map_err(GenerateError::io(&entry.path()))?.is_dir() {
            collect_scope_roots(root, &rel.join(entry.file_name()), definitions_file, found)?;
        }
    }
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(GenerateError::io(path))
}
