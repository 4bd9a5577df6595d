// Code generated by schemagen. DO NOT EDIT.

include!("schema.rs");

/// Resolved JSON schemas of the `broken` service, keyed by name.
///
/// Decoded on first access. A payload that fails to decode aborts the
/// program.
pub static SCHEMAS: ::std::sync::LazyLock<::schemagen_runtime::SchemaRegistry> =
    ::std::sync::LazyLock::new(|| {
        ::schemagen_runtime::SchemaRegistry::from_embedded(EMBEDDED)
            .unwrap_or_else(|err| panic!("{}: {err}", "broken"))
    });

/// Decodes [`SCHEMAS`] now instead of on first access.
pub fn init() {
    ::std::sync::LazyLock::force(&SCHEMAS);
}
