use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use schemagen_runtime::codec;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).expect("failed to create parent");
    fs::write(path, content).expect("failed to write file");
}

/// Writes a tree with one pooled definition and one schema referencing it.
fn write_schema_tree(root: &Path) {
    write(
        root,
        "definitions.json",
        r#"{"$schema": "http://json-schema.org/draft-04/schema#",
            "definitions": {"id": {"type": "integer", "minimum": 1}}}"#,
    );
    write(
        root,
        "testservice/testmethod.json",
        r##"{"type": "object", "properties": {"id": {"$ref": "#/definitions/id"}}}"##,
    );
}

fn schemagen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_schemagen"));
    cmd.env_remove("RUST_LOG").env_remove("SCHEMAGEN_PATH");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("failed to run schemagen")
}

/// Extracts and decompresses the payload stored under `key` in an artifact.
fn embedded_schema(artifact: &Path, key: &str) -> serde_json::Value {
    let text = fs::read_to_string(artifact).expect("failed to read artifact");
    let start = text.find(&format!("({key:?}, &[")).expect("key not in artifact");
    let body = &text[start..];
    let open = body.find("&[").unwrap() + 2;
    let close = body.find("]),").unwrap();
    let packed: Vec<u8> = body[open..close]
        .split(',')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(|tok| u8::from_str_radix(tok.trim_start_matches("0x"), 16).unwrap())
        .collect();
    let bytes = codec::decompress(&packed).expect("payload is not gzip");
    serde_json::from_slice(&bytes).expect("payload is not JSON")
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_separate_emits_one_directory_per_service() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_schema_tree(input.path());
    let output = out.path().join("schema");

    let result = run(schemagen()
        .args(["--separate", "generate", "--input"])
        .arg(input.path())
        .arg("--output")
        .arg(&output));
    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Generated 1 service(s) from 1 schema(s)."));

    let service = output.join("testservice");
    let loader = fs::read_to_string(service.join("bind.rs")).unwrap();
    assert!(loader.contains("include!(\"schema.rs\");"));
    assert!(loader.contains("\"testservice\""));

    let schema = embedded_schema(&service.join("schema.rs"), "testmethod");
    assert_eq!(
        schema["definitions"]["id"],
        serde_json::json!({"type": "integer", "minimum": 1})
    );
    assert_eq!(schema["properties"]["id"]["$ref"], "#/definitions/id");
}

#[test]
fn generate_merge_is_default_and_reproducible() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_schema_tree(input.path());
    let output = out.path().join("schema");

    for _ in 0..2 {
        let result = run(schemagen()
            .args(["generate", "--input"])
            .arg(input.path())
            .arg("--output")
            .arg(&output));
        assert!(result.status.success());
    }
    let first = fs::read(output.join("schema.rs")).unwrap();

    let result = run(schemagen()
        .args(["--jobs", "1", "generate", "--input"])
        .arg(input.path())
        .arg("--output")
        .arg(&output));
    assert!(result.status.success());

    assert_eq!(first, fs::read(output.join("schema.rs")).unwrap());
    assert!(output.join("bind.rs").is_file());
    assert!(!output.join("testservice").exists());
}

#[test]
fn generate_reads_policy_from_config() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_schema_tree(input.path());
    let config = out.path().join("schemagen.yaml");
    fs::write(&config, "policy: separate\nartifact_file: table.rs\n").unwrap();
    let output = out.path().join("api");

    let result = run(schemagen()
        .arg("--config")
        .arg(&config)
        .args(["generate", "--input"])
        .arg(input.path())
        .arg("--output")
        .arg(&output));
    assert!(result.status.success());
    assert!(output.join("testservice").join("table.rs").is_file());
    let loader = fs::read_to_string(output.join("testservice").join("bind.rs")).unwrap();
    assert!(loader.contains("include!(\"table.rs\");"));
}

#[test]
fn generate_unknown_reference_fails() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_schema_tree(input.path());
    write(
        input.path(),
        "testservice/broken.json",
        r##"{"$ref": "#/definitions/nope"}"##,
    );
    let output = out.path().join("schema");

    let result = run(schemagen()
        .args(["generate", "--input"])
        .arg(input.path())
        .arg("--output")
        .arg(&output));
    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("missing definition nope"));
    assert!(!output.exists());
}

#[test]
fn generate_schema_with_definitions_key_fails() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write(input.path(), "svc/m.json", r#"{"definitions": {}}"#);

    let result = run(schemagen()
        .args(["generate", "--input"])
        .arg(input.path())
        .arg("--output")
        .arg(out.path().join("schema")));
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("must not have a \"definitions\" field"));
}

#[test]
fn generate_nested_scopes_mirrors_output() {
    let input = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_schema_tree(input.path());
    write(
        input.path(),
        "inner/definitions.json",
        r#"{"definitions": {"id": {"type": "string"}}}"#,
    );
    write(
        input.path(),
        "inner/svc/m.json",
        r##"{"$ref": "#/definitions/id"}"##,
    );
    let output = out.path().join("schema");

    let result = run(schemagen()
        .args(["generate", "--nested-scopes", "--input"])
        .arg(input.path())
        .arg("--output")
        .arg(&output));
    assert!(result.status.success());

    let outer = fs::read_to_string(output.join("schema.rs")).unwrap();
    assert!(!outer.contains("(\"m\", &["));
    let inner = embedded_schema(&output.join("inner").join("schema.rs"), "m");
    assert_eq!(inner["definitions"]["id"]["type"], "string");
}

// ---------------------------------------------------------------------------
// glob
// ---------------------------------------------------------------------------

#[test]
fn glob_mode_walks_search_path() {
    let root = tempfile::tempdir().unwrap();
    write_schema_tree(&root.path().join("schema/api"));
    write(root.path(), "schema/orphan/definitions.json", r#"{"definitions": {}}"#);
    fs::create_dir_all(root.path().join("src/api")).unwrap();

    let result = run(schemagen().env("SCHEMAGEN_PATH", root.path()));
    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    assert!(String::from_utf8_lossy(&result.stdout).contains("Generated 1 service(s) from 1 schema(s)."));

    let schema = embedded_schema(&root.path().join("src/api/schema.rs"), "testmethod");
    assert_eq!(schema["definitions"]["id"]["minimum"], 1);
    assert!(!root.path().join("src/orphan").exists());
}

#[test]
fn glob_without_search_path_generates_nothing() {
    let result = run(schemagen().arg("glob"));
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("Generated 0 service(s) from 0 schema(s)."));
}
