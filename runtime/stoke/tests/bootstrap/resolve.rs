//! Resolution through manifests and the filesystem source.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use stoke::commands::{resolve_identifiers, LoaderOptions};
use stoke::{Manifest, Overrides};
use stoke_diagnostic::{DiagnosticQueue, Level};
use stoke_loader::{FsUnitSource, Resolution, Stage};

use crate::write;

fn options(manifest: PathBuf, identifiers: &[&str]) -> LoaderOptions {
    LoaderOptions {
        manifest: Some(manifest),
        identifiers: identifiers.iter().map(|s| (*s).to_owned()).collect(),
        ..LoaderOptions::default()
    }
}

#[test]
fn namespace_mapping_loads_unit_and_runs_initializer_once() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "stoke.toml",
        r#"
[[namespaces]]
prefix = "App\\Models"
path = "src/models"
"#,
    );
    write(
        root,
        "src/models/User.unit",
        r"
        namespace App\Models;

        class User {
            init { require Role; }
        }
        ",
    );
    write(root, "src/models/Role.unit", "namespace App\\Models; class Role {}");

    let manifest = Manifest::load(&root.join("stoke.toml")).unwrap();
    let config = manifest.loader_config(&Overrides::default(), &Overrides::default()).unwrap();
    let queue = DiagnosticQueue::new();
    let mut loader = manifest.build_loader(config, FsUnitSource, queue.clone());

    let first = loader.resolve("App\\Models\\User").unwrap();
    assert_eq!(
        first,
        Resolution::Loaded {
            stage: Stage::Namespace,
            path: root.join("src/models").join("User.unit"),
        }
    );
    assert!(loader.is_defined("App\\Models\\Role"));
    assert_eq!(loader.in_flight(), None);

    let second = loader.resolve("App\\Models\\User").unwrap();
    assert_eq!(second, Resolution::AlreadyDefined);
    assert_eq!(loader.loaded_paths().count(), 2);
    assert_eq!(queue.count_at(Level::Error), 0);
}

#[test]
fn unknown_identifier_without_registrations_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "stoke.toml", "app_path = \".\"\n");

    let report = resolve_identifiers(
        &options(dir.path().join("stoke.toml"), &["Unknown\\Thing"]),
        &Overrides::default(),
    )
    .unwrap();

    assert_eq!(report.failures(), 1);
    assert!(matches!(
        report.outcomes[0].result,
        Ok(Resolution::NotFound)
    ));
    assert!(report.diagnostics.iter().all(|d| !d.is_error()));
    let attempted: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.level == Level::Debug && d.message.contains("no unit at"))
        .collect();
    assert!(!attempted.is_empty());
    assert!(attempted[0]
        .message
        .contains(&format!("{}", PathBuf::from("classes").join("Unknown").display())));
}

#[test]
fn relative_manifest_paths_resolve_against_manifest_directory() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(
        root,
        "conf/stoke.toml",
        r#"
app_path = ".."
extension = "src"

[classes]
"Legacy_Thing" = "../vendor/thing.src"
"#,
    );
    write(root, "vendor/thing.src", "class Legacy_Thing {}");
    write(root, "classes/Model/Crud.src", "class Model_Crud {}");

    let report = resolve_identifiers(
        &options(root.join("conf/stoke.toml"), &["Legacy_Thing", "Model_Crud"]),
        &Overrides::default(),
    )
    .unwrap();

    assert!(report.is_success(), "{report:?}");
    assert!(matches!(
        &report.outcomes[0].result,
        Ok(Resolution::Loaded { stage: Stage::Explicit, .. })
    ));
    assert!(matches!(
        &report.outcomes[1].result,
        Ok(Resolution::Loaded { stage: Stage::Local, .. })
    ));
}

#[test]
fn cli_app_path_overrides_environment_and_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "stoke.toml", "app_path = \"manifest-app\"\n");
    write(root, "manifest-app/classes/Thing.unit", "class Wrong {}");
    write(root, "cli-app/classes/Thing.unit", "class Thing {}");

    let mut opts = options(root.join("stoke.toml"), &["Thing"]);
    opts.app_path = Some(root.join("cli-app"));
    let env = Overrides {
        app_path: Some(root.join("env-app")),
        extension: None,
    };

    let report = resolve_identifiers(&opts, &env).unwrap();

    assert!(report.is_success(), "{report:?}");
    assert_eq!(
        report.outcomes[0].result.as_ref().unwrap(),
        &Resolution::Loaded {
            stage: Stage::Local,
            path: root.join("cli-app/classes").join("Thing.unit"),
        }
    );
}

#[test]
fn malformed_unit_is_reported_and_later_identifiers_still_resolve() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "stoke.toml", "");
    write(root, "classes/Broken.unit", "class Broken {");
    write(root, "classes/Fine.unit", "class Fine {}");

    let mut opts = options(root.join("stoke.toml"), &["Broken", "Fine"]);
    opts.app_path = Some(root.to_path_buf());
    let report = resolve_identifiers(&opts, &Overrides::default()).unwrap();

    assert_eq!(report.failures(), 1);
    let err = report.outcomes[0].result.as_ref().unwrap_err();
    assert_eq!(err.code().as_str(), "L0002");
    assert!(report.outcomes[1].is_loaded());
    assert_eq!(
        report.diagnostics.iter().filter(|d| d.is_error()).count(),
        1
    );
}
