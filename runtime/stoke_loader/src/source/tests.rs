use std::fs;

use super::*;
use pretty_assertions::assert_eq;
use stoke_ir::DefKind;

#[test]
fn fs_source_scans_unit_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("User.unit");
    fs::write(
        &path,
        "namespace App\\Models;\nclass User extends Model { init { require Role; } }\n",
    )
    .unwrap();

    let mut source = FsUnitSource;
    assert!(source.exists(&path));
    assert!(!source.exists(dir.path()));

    let defs = source.load(&path).unwrap();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].name, "App\\Models\\User");
    assert_eq!(defs[0].kind, DefKind::Class);
    assert_eq!(defs[0].dependencies, vec!["App\\Models\\Model".to_string()]);
    assert!(defs[0].has_initializer());
}

#[test]
fn fs_source_reports_unreadable_unit() {
    let dir = tempfile::tempdir().unwrap();
    let err = FsUnitSource.load(&dir.path().join("Missing.unit")).unwrap_err();
    assert!(matches!(err, LoadError::Unreadable { .. }));
}

#[test]
fn fs_source_reports_malformed_unit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Broken.unit");
    fs::write(&path, "class Broken {").unwrap();

    let err = FsUnitSource.load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }));
}

#[test]
fn memory_source_counts_loads_across_clones() {
    let source = MemoryUnitSource::new();
    source.add_text("/src/A.unit", "class A {}");
    source.add_definitions("/src/B.unit", vec![Definition::class("B")]);

    let mut handle = source.clone();
    assert!(handle.exists(Path::new("/src/A.unit")));
    assert!(!handle.exists(Path::new("/src/C.unit")));

    let a = handle.load(Path::new("/src/A.unit")).unwrap();
    let b = handle.load(Path::new("/src/B.unit")).unwrap();
    assert_eq!(a[0].name, "A");
    assert_eq!(b[0].name, "B");

    assert_eq!(source.load_count("/src/A.unit"), 1);
    assert_eq!(source.load_count("/src/C.unit"), 0);
    assert_eq!(source.total_loads(), 2);
}

#[test]
fn memory_source_missing_unit_is_unreadable() {
    let mut source = MemoryUnitSource::new();
    let err = source.load(Path::new("/nowhere.unit")).unwrap_err();
    assert!(matches!(err, LoadError::Unreadable { .. }));
    assert_eq!(source.load_count("/nowhere.unit"), 1);
}
