//! Namespaced identifiers.
//!
//! An identifier is a `\`-separated path such as `App\Models\User`. The part
//! before the last separator is its namespace, the part after it its tail.
//! Leading separators (`\App\Models\User`) are insignificant and stripped.

use std::fmt;

/// Separator between namespace segments.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Legacy separator inside the final segment (`Model_Crud` → `Model/Crud`).
pub const FLAT_SEPARATOR: char = '_';

/// A normalized, borrowed namespaced identifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident<'a> {
    full: &'a str,
    /// Byte offset of the last separator, if qualified.
    split: Option<usize>,
}

impl<'a> Ident<'a> {
    /// Parse an identifier, stripping any leading separators.
    pub fn parse(raw: &'a str) -> Self {
        let full = raw.trim_start_matches(NAMESPACE_SEPARATOR);
        Ident {
            full,
            split: full.rfind(NAMESPACE_SEPARATOR),
        }
    }

    /// The normalized identifier text.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.full
    }

    /// Namespace part (everything before the last separator), empty if
    /// unqualified.
    #[inline]
    pub fn namespace(&self) -> &'a str {
        self.split.map_or("", |pos| &self.full[..pos])
    }

    /// Unqualified tail (everything after the last separator).
    #[inline]
    pub fn tail(&self) -> &'a str {
        self.split.map_or(self.full, |pos| &self.full[pos + 1..])
    }

    /// Whether the identifier has a namespace part.
    #[inline]
    pub fn is_qualified(&self) -> bool {
        !self.namespace().is_empty()
    }

    /// Namespace segments followed by the tail.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.full.split(NAMESPACE_SEPARATOR)
    }

    /// Match a registered namespace prefix against this identifier.
    ///
    /// The prefix matches when the namespace part starts with it, compared
    /// ASCII-case-insensitively. This is a plain string prefix test: `App`
    /// matches `Application\Thing` as well as `App\Thing`.
    ///
    /// On a match, returns the identifier with the prefix and the one
    /// character after it removed. An empty prefix is a root mapping and
    /// returns the whole identifier.
    pub fn strip_namespace_prefix(&self, prefix: &str) -> Option<&'a str> {
        let prefix = normalize_namespace(prefix);
        let namespace = self.namespace();
        if namespace.is_empty() {
            return None;
        }
        if prefix.is_empty() {
            return Some(self.full);
        }
        if namespace.len() < prefix.len()
            || !namespace.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
        {
            return None;
        }

        // The matched bytes differ from `prefix` only in ASCII case, so
        // `prefix.len()` is a char boundary in `full` too.
        let mut rest = self.full[prefix.len()..].chars();
        rest.next();
        Some(rest.as_str())
    }
}

impl fmt::Display for Ident<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full)
    }
}

/// Strip leading and trailing separators from a namespace.
#[inline]
pub fn normalize_namespace(namespace: &str) -> &str {
    namespace.trim_matches(NAMESPACE_SEPARATOR)
}

/// Join a namespace and a tail. An empty namespace is the root namespace.
pub fn qualify(namespace: &str, tail: &str) -> String {
    let namespace = normalize_namespace(namespace);
    let tail = tail.trim_start_matches(NAMESPACE_SEPARATOR);
    if namespace.is_empty() {
        return tail.to_owned();
    }
    let mut out = String::with_capacity(namespace.len() + 1 + tail.len());
    out.push_str(namespace);
    out.push(NAMESPACE_SEPARATOR);
    out.push_str(tail);
    out
}
