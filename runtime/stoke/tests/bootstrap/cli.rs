//! The `stoke` binary's exit codes and output.

use std::process::{Command, Output};

use crate::write;

fn stoke(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stoke"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("STOKE_APP_PATH")
        .env_remove("STOKE_EXTENSION")
        .output()
        .expect("failed to run stoke")
}

#[test]
fn resolve_reports_each_identifier_and_fails_on_missing() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "stoke.toml", "core_namespaces = [\"Stoke\\\\Core\"]\n");
    write(
        dir.path(),
        "classes/Stoke/Core/Arr.unit",
        "namespace Stoke\\Core; class Arr {}",
    );

    let output = stoke(dir.path(), &["resolve", "Arr", "Ghost"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(!output.status.success());
    assert!(stdout.contains("Arr: aliased to `Stoke\\Core\\Arr`"), "{stdout}");
    assert!(stdout.contains("Ghost: not found"), "{stdout}");
    assert!(stderr.contains("1 identifier failed to load"), "{stderr}");
}

#[test]
fn resolve_succeeds_when_everything_loads() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "stoke.toml", "");
    write(dir.path(), "classes/Model/Crud.unit", "class Model_Crud {}");

    let output = stoke(dir.path(), &["resolve", "Model_Crud"]);

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .starts_with("Model_Crud: loaded from"));
}

#[test]
fn invalid_manifest_exits_with_manifest_code() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "stoke.toml", "unknown_key = 1\n");

    let output = stoke(dir.path(), &["resolve", "Anything"]);

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("L0008"));
}

#[test]
fn explain_prints_documentation() {
    let dir = tempfile::tempdir().unwrap();

    let output = stoke(dir.path(), &["explain", "W0001"]);

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().starts_with("# W0001"));
}

#[test]
fn scan_lists_declarations() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "User.unit",
        "namespace App;\nclass User extends Model {\n  init { require Role; }\n}\n",
    );

    let output = stoke(dir.path(), &["scan", "User.unit"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "class App\\User (2:7)\n  depends on App\\Model\n  init requires App\\Role\n"
    );
}
