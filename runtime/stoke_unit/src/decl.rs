//! Scanner output.

use stoke_ir::{DefKind, Span};

/// Everything a unit declares, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitDecls {
    pub definitions: Vec<Declaration>,
}

impl UnitDecls {
    /// Fully-qualified names of all declared definitions.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.name.as_str())
    }

    /// Find a declaration by fully-qualified name.
    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.definitions.iter().find(|d| d.name == name)
    }
}

/// One top-level definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Fully-qualified name, without a leading separator.
    pub name: String,
    pub kind: DefKind,
    /// Fully-qualified names from `extends` and `implements`, in source order.
    pub dependencies: Vec<String>,
    /// First-load initializer, if the body has an `init` block.
    pub init: Option<InitBlock>,
    /// Location of the definition's name.
    pub span: Span,
}

/// An `init { ... }` block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitBlock {
    /// Fully-qualified names from `require` statements, in source order.
    pub requires: Vec<String>,
    pub span: Span,
}
