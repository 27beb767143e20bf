//! Lookup registries.
//!
//! Three registries feed the staged lookup:
//! - `ExplicitRegistry`: identifier → unit path overrides (stage 1)
//! - `NamespaceRegistry`: ordered prefix → base directory (stage 2)
//! - `CoreNamespaces`: ordered prefixes for unqualified aliasing (stage 4)
//!
//! Registries only grow or overwrite. There is no removal.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use stoke_ir::Ident;

/// Identifier → unit path overrides.
///
/// Keys are stored without leading separators, so `\Legacy\Thing` and
/// `Legacy\Thing` are the same entry.
#[derive(Clone, Debug, Default)]
pub struct ExplicitRegistry {
    entries: FxHashMap<String, PathBuf>,
}

impl ExplicitRegistry {
    /// Insert or overwrite one override. Returns the previous path.
    pub fn insert(&mut self, identifier: &str, path: PathBuf) -> Option<PathBuf> {
        self.entries
            .insert(Ident::parse(identifier).as_str().to_owned(), path)
    }

    /// Path registered for `identifier`.
    pub fn get(&self, identifier: &str) -> Option<&Path> {
        self.entries
            .get(Ident::parse(identifier).as_str())
            .map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by identifier.
    pub fn sorted(&self) -> Vec<(&str, &Path)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_path()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Ordered namespace prefix → base directory mapping.
///
/// Lookup is first-match in insertion order. Re-registering a prefix
/// overwrites its directory but keeps its position. Prefixes are stored as
/// given; separators at either end only matter when matching.
#[derive(Clone, Debug, Default)]
pub struct NamespaceRegistry {
    entries: IndexMap<String, PathBuf>,
}

/// The registry entry that matched an identifier in stage 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NamespaceMatch<'r, 'i> {
    /// Prefix as registered.
    pub prefix: &'r str,
    pub base: &'r Path,
    /// Identifier with the prefix and one separator removed.
    pub rest: &'i str,
}

impl NamespaceRegistry {
    /// Insert or overwrite one entry. New prefixes are appended.
    pub fn insert(&mut self, prefix: String, base: PathBuf) {
        self.entries.insert(prefix, base);
    }

    /// Merge a batch.
    ///
    /// Appending keeps existing entries where they are: a colliding prefix
    /// takes the batch's directory at its old position. Prepending puts the
    /// batch first in batch order, followed by the remaining old entries.
    pub fn merge<I>(&mut self, batch: I, prepend: bool)
    where
        I: IntoIterator<Item = (String, PathBuf)>,
    {
        if !prepend {
            self.entries.extend(batch);
            return;
        }

        let mut merged: IndexMap<String, PathBuf> = batch.into_iter().collect();
        for (prefix, base) in self.entries.drain(..) {
            merged.entry(prefix).or_insert(base);
        }
        self.entries = merged;
    }

    /// Exact-key lookup.
    pub fn get(&self, prefix: &str) -> Option<&Path> {
        self.entries.get(prefix).map(PathBuf::as_path)
    }

    /// Entries in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose prefix matches the identifier's namespace.
    ///
    /// See `Ident::strip_namespace_prefix` for the matching rule. Only the
    /// first syntactic match is returned; whether a unit exists under it is
    /// not considered.
    pub fn first_match<'r, 'i>(&'r self, ident: &Ident<'i>) -> Option<NamespaceMatch<'r, 'i>> {
        self.entries.iter().find_map(|(prefix, base)| {
            ident
                .strip_namespace_prefix(prefix)
                .map(|rest| NamespaceMatch {
                    prefix,
                    base,
                    rest,
                })
        })
    }
}

/// Ordered core namespace prefixes.
#[derive(Clone, Debug, Default)]
pub struct CoreNamespaces {
    prefixes: VecDeque<String>,
}

impl CoreNamespaces {
    /// Add a prefix at the front (high priority) or the back.
    pub fn insert(&mut self, prefix: String, high_priority: bool) {
        if high_priority {
            self.prefixes.push_front(prefix);
        } else {
            self.prefixes.push_back(prefix);
        }
    }

    /// Prefixes in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests;
