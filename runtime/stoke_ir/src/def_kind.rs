//! Kinds of definition a unit can declare.

use std::fmt;
use std::str::FromStr;

/// Kind of a top-level definition.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DefKind {
    Class,
    Interface,
    Trait,
}

impl DefKind {
    /// Keyword introducing this kind in unit source.
    pub fn keyword(self) -> &'static str {
        match self {
            DefKind::Class => "class",
            DefKind::Interface => "interface",
            DefKind::Trait => "trait",
        }
    }
}

impl fmt::Display for DefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for DefKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(DefKind::Class),
            "interface" => Ok(DefKind::Interface),
            "trait" => Ok(DefKind::Trait),
            _ => Err(()),
        }
    }
}
