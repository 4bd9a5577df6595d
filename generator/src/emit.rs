//! Rust source emission for finished services.
//!
//! Two files are written per service:
//!
//! - the artifact (`schema.rs` by default): a static `EMBEDDED` table of
//!   `(key, gzip payload)` pairs, sorted by key;
//! - the loader (`bind.rs` by default): includes the artifact and exposes a
//!   lazily decoded `SCHEMAS` registry backed by `schemagen-runtime`.
//!
//! A consuming crate mounts the loader as a module:
//!
//! ```ignore
//! #[path = "schemas/users/bind.rs"]
//! mod users;
//!
//! let create = users::SCHEMAS.get("create").unwrap();
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use schemagen_runtime::codec;

use crate::config::GenerateConfig;
use crate::error::{GenerateError, Result};

const HEADER: &str = "// Code generated by schemagen. DO NOT EDIT.\n";
const BYTES_PER_LINE: usize = 12;

/// Renders the payload table for `service`.
///
/// Each payload is compressed with [`codec::compress`]; iteration order of
/// `entries` is the order in the table.
///
/// # Errors
///
/// Returns an I/O error if compression fails.
pub fn render_artifact(service: &str, entries: &BTreeMap<String, Vec<u8>>) -> std::io::Result<String> {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&format!(
        "/// Gzip-compressed resolved schemas of the `{service}` service, keyed by name.\n"
    ));
    out.push_str("pub static EMBEDDED: &[(&str, &[u8])] = &[\n");

    for (key, bytes) in entries {
        let packed = codec::compress(bytes)?;
        out.push_str(&format!("    ({key:?}, &[\n"));
        for chunk in packed.chunks(BYTES_PER_LINE) {
            out.push_str("       ");
            for byte in chunk {
                out.push_str(&format!(" {byte:#04x},"));
            }
            out.push('\n');
        }
        out.push_str("    ]),\n");
    }

    out.push_str("];\n");
    Ok(out)
}

/// Renders the loader for `service`, including `artifact_file`.
pub fn render_loader(service: &str, artifact_file: &str) -> String {
    format!(
        r#"{HEADER}
include!({artifact_file:?});

/// Resolved JSON schemas of the `{service}` service, keyed by name.
///
/// Decoded on first access. A payload that fails to decode aborts the
/// program.
pub static SCHEMAS: ::std::sync::LazyLock<::schemagen_runtime::SchemaRegistry> =
    ::std::sync::LazyLock::new(|| {{
        ::schemagen_runtime::SchemaRegistry::from_embedded(EMBEDDED)
            .unwrap_or_else(|err| panic!("{{}}: {{err}}", {service:?}))
    }});

/// Decodes [`SCHEMAS`] now instead of on first access.
pub fn init() {{
    ::std::sync::LazyLock::force(&SCHEMAS);
}}
"#
    )
}

/// Writes the artifact and loader of one service into `dir`.
///
/// The directory is created if needed. The two files are written one after
/// the other.
///
/// # Errors
///
/// Returns [`GenerateError::Io`] if the directory or either file cannot be
/// written.
pub fn emit_service(
    service: &str,
    entries: &BTreeMap<String, Vec<u8>>,
    dir: &Path,
    config: &GenerateConfig,
) -> Result<()> {
    fs::create_dir_all(dir).map_err(GenerateError::io(dir))?;

    let artifact_path = dir.join(&config.artifact_file);
    let artifact = render_artifact(service, entries).map_err(GenerateError::io(&artifact_path))?;
    fs::write(&artifact_path, artifact).map_err(GenerateError::io(&artifact_path))?;

    let loader_path = dir.join(&config.loader_file);
    fs::write(&loader_path, render_loader(service, &config.artifact_file))
        .map_err(GenerateError::io(&loader_path))?;

    tracing::info!(service, dir = %dir.display(), schemas = entries.len(), "emitted service");
    Ok(())
}
