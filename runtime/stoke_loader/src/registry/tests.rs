use super::*;
use pretty_assertions::assert_eq;

fn entries(registry: &NamespaceRegistry) -> Vec<(String, PathBuf)> {
    registry
        .iter()
        .map(|(k, v)| (k.to_owned(), v.to_path_buf()))
        .collect()
}

fn batch(items: &[(&str, &str)]) -> Vec<(String, PathBuf)> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_owned(), PathBuf::from(v)))
        .collect()
}

#[test]
fn explicit_keys_ignore_leading_separator() {
    let mut registry = ExplicitRegistry::default();
    registry.insert("\\Legacy\\Thing", PathBuf::from("a.unit"));
    assert_eq!(registry.get("Legacy\\Thing"), Some(Path::new("a.unit")));
    assert_eq!(registry.get("\\Legacy\\Thing"), Some(Path::new("a.unit")));

    let previous = registry.insert("Legacy\\Thing", PathBuf::from("b.unit"));
    assert_eq!(previous, Some(PathBuf::from("a.unit")));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.sorted(), vec![("Legacy\\Thing", Path::new("b.unit"))]);
}

#[test]
fn overwrite_keeps_position() {
    let mut registry = NamespaceRegistry::default();
    registry.insert("A".into(), "/a".into());
    registry.insert("B".into(), "/b".into());
    registry.insert("A".into(), "/a2".into());

    assert_eq!(entries(&registry), batch(&[("A", "/a2"), ("B", "/b")]));
    assert_eq!(registry.get("A"), Some(Path::new("/a2")));
    assert_eq!(registry.get("C"), None);
}

#[test]
fn append_merge_keeps_existing_positions() {
    let mut registry = NamespaceRegistry::default();
    registry.insert("A".into(), "/a".into());
    registry.insert("B".into(), "/b".into());
    registry.merge(batch(&[("C", "/c"), ("A", "/a-new")]), false);

    assert_eq!(
        entries(&registry),
        batch(&[("A", "/a-new"), ("B", "/b"), ("C", "/c")])
    );
}

#[test]
fn prepend_merge_puts_batch_first() {
    let mut registry = NamespaceRegistry::default();
    registry.insert("A".into(), "/a".into());
    registry.insert("B".into(), "/b".into());
    registry.merge(batch(&[("C", "/c"), ("A", "/a-new")]), true);

    assert_eq!(
        entries(&registry),
        batch(&[("C", "/c"), ("A", "/a-new"), ("B", "/b")])
    );
}

#[test]
fn first_match_in_insertion_order() {
    let mut registry = NamespaceRegistry::default();
    registry.insert("App".into(), "/app".into());
    registry.insert("App\\Models".into(), "/models".into());

    let ident = Ident::parse("App\\Models\\User");
    let found = registry.first_match(&ident).unwrap();
    assert_eq!(found.prefix, "App");
    assert_eq!(found.base, Path::new("/app"));
    assert_eq!(found.rest, "Models\\User");
}

#[test]
fn first_match_ignores_case_and_surrounding_separators() {
    let mut registry = NamespaceRegistry::default();
    registry.insert("\\app\\models\\".into(), "/models".into());

    let ident = Ident::parse("App\\Models\\User");
    let found = registry.first_match(&ident).unwrap();
    assert_eq!(found.rest, "User");
}

#[test]
fn unqualified_identifier_never_matches() {
    let mut registry = NamespaceRegistry::default();
    registry.insert(String::new(), "/root".into());
    assert_eq!(registry.first_match(&Ident::parse("User")), None);
    assert_eq!(
        registry.first_match(&Ident::parse("A\\User")).map(|m| m.rest),
        Some("A\\User")
    );
}

#[test]
fn core_namespaces_priority() {
    let mut core = CoreNamespaces::default();
    core.insert("Stoke\\Core".into(), true);
    core.insert("Vendor\\Base".into(), false);
    core.insert("App\\Override".into(), true);

    assert_eq!(
        core.iter().collect::<Vec<_>>(),
        vec!["App\\Override", "Stoke\\Core", "Vendor\\Base"]
    );
    assert_eq!(core.len(), 3);
}
