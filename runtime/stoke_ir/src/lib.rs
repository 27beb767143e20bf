//! Stoke IR - shared identifier types
//!
//! This crate contains the small vocabulary every other stoke crate speaks:
//! - `Ident` for namespaced identifiers (`App\Models\User`)
//! - `Name` and `StringInterner` for interned symbol names
//! - `Span` for byte ranges inside unit sources
//! - `DefKind` for the kinds of definition a unit can declare
//!
//! # Design Philosophy
//!
//! - **Borrow, don't allocate**: `Ident` is a view over the caller's string
//! - **Intern symbol names**: the symbol table keys on `Name(u32)`
//! - **Case rules live here**: prefix matching is ASCII-case-insensitive,
//!   symbol names are case-sensitive

mod def_kind;
mod ident;
mod interner;
mod name;
mod span;

pub use def_kind::DefKind;
pub use ident::{
    normalize_namespace, qualify, Ident, FLAT_SEPARATOR, NAMESPACE_SEPARATOR,
};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
