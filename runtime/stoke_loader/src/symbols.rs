//! Symbol table: definitions plus the names bound to them.
//!
//! Definitions live in an arena indexed by `DefId`. Names are interned and
//! bound to a `DefId`; an alias is just another binding to the same id, so
//! both names see one definition.

use rustc_hash::FxHashMap;
use stoke_ir::{Name, StringInterner};

use crate::Definition;

/// Index of a definition in the symbol table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DefId(u32);

impl DefId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result of binding an alias name.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AliasBinding {
    /// The name was free and is now bound.
    Created,
    /// The name was already bound to the same definition.
    Unchanged,
    /// The name is bound to a different definition; nothing changed.
    Conflict(DefId),
}

#[derive(Default)]
pub struct SymbolTable {
    interner: StringInterner,
    definitions: Vec<Definition>,
    bindings: FxHashMap<Name, DefId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Definition bound to `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<DefId> {
        let name = self.interner.get(name)?;
        self.bindings.get(&name).copied()
    }

    #[inline]
    pub fn is_bound(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Get a definition by id.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this table.
    pub fn get(&self, id: DefId) -> &Definition {
        &self.definitions[id.index()]
    }

    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.lookup(name).map(|id| self.get(id))
    }

    /// Add a definition and bind its own name.
    ///
    /// Returns the existing id instead if the name is already bound; the
    /// table is unchanged in that case.
    pub fn define(&mut self, definition: Definition) -> Result<DefId, DefId> {
        if let Some(existing) = self.lookup(&definition.name) {
            return Err(existing);
        }
        let name = self.interner.intern(&definition.name);
        let id = DefId(
            u32::try_from(self.definitions.len())
                .unwrap_or_else(|_| panic!("symbol table exceeded {} definitions", u32::MAX)),
        );
        self.definitions.push(definition);
        self.bindings.insert(name, id);
        Ok(id)
    }

    /// Bind `alias` to an existing definition.
    pub fn alias(&mut self, alias: &str, target: DefId) -> AliasBinding {
        match self.lookup(alias) {
            Some(existing) if existing == target => AliasBinding::Unchanged,
            Some(existing) => AliasBinding::Conflict(existing),
            None => {
                let name = self.interner.intern(alias);
                self.bindings.insert(name, target);
                AliasBinding::Created
            }
        }
    }

    /// Number of bound names, aliases included.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Number of distinct definitions.
    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Bound names with the canonical name of their definition, sorted.
    pub fn bindings(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<_> = self
            .bindings
            .iter()
            .map(|(name, id)| (self.interner.lookup(*name), self.get(*id).name.as_str()))
            .collect();
        out.sort_unstable();
        out
    }
}
