//! Integration tests driving the compiled binary end-to-end.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn get_binary_path() -> String {
    std::env::var("CARGO_BIN_EXE_erdgen").unwrap_or_else(|_| "target/debug/erdgen".to_string())
}

fn run_erdgen(input: &Path, output: &Path) -> std::process::Output {
    Command::new(get_binary_path())
        .arg("--input")
        .arg(input)
        .arg("--output")
        .arg(output)
        .output()
        .expect("failed to run erdgen")
}

fn create_models(dir: &TempDir) -> PathBuf {
    let models = dir.path().join("models");
    fs::create_dir(&models).unwrap();

    fs::write(
        models.join("User.json"),
        r#"{
            "name": { "type": "text" },
            "age": { "type": "number" },
            "role": { "type": "text", "enum": ["admin", "user"] }
        }"#,
    )
    .unwrap();

    fs::write(
        models.join("Post.json"),
        r#"{
            "title": { "type": "text" },
            "author": { "ref": "User" }
        }"#,
    )
    .unwrap();

    fs::write(
        models.join("Order.yaml"),
        "items:\n  - product:\n      type: text\n    qty:\n      type: number\n",
    )
    .unwrap();

    models
}

#[test]
fn test_generate_end_to_end() {
    let dir = TempDir::new().unwrap();
    let models = create_models(&dir);
    let out = dir.path().join("out");

    let result = run_erdgen(&models, &out);
    assert!(result.status.success());

    let erd = fs::read_to_string(out.join("erd.mmd")).unwrap();
    assert!(erd.starts_with("erDiagram\n"));
    assert!(erd.contains("User {\n  string name\n  number age\n  string role \"admin,user\"\n}\n"));
    assert!(erd.contains("Post ||--o{ \"User\" : \"author\"\n"));
    assert!(erd.contains("Order ||--o{ \"Order_items\" : \"items\"\n"));
    assert!(erd.contains("Order_items {\n  string product\n  number qty\n}\n"));

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("ERD written to:"));
    assert!(stderr.contains("entities"));
}

#[test]
fn test_generate_with_glob_pattern() {
    let dir = TempDir::new().unwrap();
    let models = create_models(&dir);
    let out = dir.path().join("out");

    let pattern = models.join("*.json");
    let result = run_erdgen(&pattern, &out);
    assert!(result.status.success());

    let erd = fs::read_to_string(out.join("erd.mmd")).unwrap();
    assert!(erd.contains("User {"));
    assert!(erd.contains("Post {"));
    // The YAML model does not match the pattern.
    assert!(!erd.contains("Order {"));
}

#[test]
fn test_generate_skips_node_modules_and_bad_sources() {
    let dir = TempDir::new().unwrap();
    let models = create_models(&dir);
    let out = dir.path().join("out");

    let deps = models.join("node_modules");
    fs::create_dir(&deps).unwrap();
    fs::write(deps.join("Vendored.json"), r#"{ "x": { "type": "text" } }"#).unwrap();
    fs::write(models.join("Broken.json"), "{ not json").unwrap();

    let result = run_erdgen(&models, &out);
    assert!(result.status.success());

    let erd = fs::read_to_string(out.join("erd.mmd")).unwrap();
    assert!(!erd.contains("Vendored"));
    assert!(!erd.contains("Broken"));
    assert!(erd.contains("User {"));
}

#[test]
fn test_generate_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let models = create_models(&dir);
    let out = dir.path().join("out");

    assert!(run_erdgen(&models, &out).status.success());
    let first = fs::read_to_string(out.join("erd.mmd")).unwrap();

    assert!(run_erdgen(&models, &out).status.success());
    let second = fs::read_to_string(out.join("erd.mmd")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_generate_empty_input_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");

    let result = run_erdgen(&dir.path().join("missing"), &out);
    assert!(result.status.success());

    let erd = fs::read_to_string(out.join("erd.mmd")).unwrap();
    assert_eq!(erd, "erDiagram\n");
}

#[test]
fn test_generate_creates_output_directory() {
    let dir = TempDir::new().unwrap();
    let models = create_models(&dir);
    // The output option names a directory, even when it looks like a file.
    let out = dir.path().join("deep").join("erd.mmd");

    let result = run_erdgen(&models, &out);
    assert!(result.status.success());
    assert!(out.join("erd.mmd").is_file());
}
