use super::*;

#[test]
fn test_intern_returns_same_name() {
    let mut interner = StringInterner::new();
    let a = interner.intern("App\\Models\\User");
    let b = interner.intern("App\\Models\\User");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "App\\Models\\User");
}

#[test]
fn test_distinct_strings_distinct_names() {
    let mut interner = StringInterner::new();
    let a = interner.intern("User");
    let b = interner.intern("user");
    assert_ne!(a, b);
    assert_eq!(interner.len(), 3);
}

#[test]
fn test_empty_is_pre_interned() {
    let mut interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert!(!interner.is_empty());
}

#[test]
fn test_get_does_not_intern() {
    let mut interner = StringInterner::new();
    assert_eq!(interner.get("Role"), None);
    let role = interner.intern("Role");
    assert_eq!(interner.get("Role"), Some(role));
}

#[test]
fn test_foreign_name_resolves_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(999)), "");
}
