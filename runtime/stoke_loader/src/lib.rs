//! Stoke Loader - resolve namespaced identifiers to units and load them
//!
//! The `Loader` owns every registry and runs a staged lookup for each
//! identifier it is asked to resolve:
//!
//! ```text
//! resolve("App\Models\User")
//!   │
//!   ├─ 1. explicit override      ExplicitRegistry["App\Models\User"]
//!   ├─ 2. namespace prefix       NamespaceRegistry (first match wins)
//!   ├─ 3. local fallback         app_path/classes/App/Models/User.unit
//!   └─ 4. core aliasing          only for unqualified identifiers
//! ```
//!
//! A found unit is handed to the `UnitSource` exactly once. Its definitions
//! are bound in the `SymbolTable`, and the outermost requested symbol gets
//! its `OnFirstLoad` initializer run.
//!
//! # Design Philosophy
//!
//! - **No globals**: registries are fields of an owned `Loader`
//! - **Aliases are bindings**: two names, one definition
//! - **Typed outcomes**: `Resolution` for what happened, `LoadError` for
//!   defects in the units themselves
//! - **Diagnostics out of band**: probes and refusals go to a `DiagnosticSink`

mod config;
mod definition;
mod error;
mod loader;
pub mod paths;
mod registry;
mod shared;
mod source;
mod state;
mod symbols;

pub use config::LoaderConfig;
pub use definition::{Definition, OnFirstLoad, RequireOnInit};
pub use error::LoadError;
pub use loader::{AliasOutcome, Loader, Probe, Resolution, Stage};
pub use registry::{CoreNamespaces, ExplicitRegistry, NamespaceMatch, NamespaceRegistry};
pub use shared::SharedLoader;
pub use source::{FsUnitSource, MemoryUnitSource, UnitSource};
pub use state::LoadState;
pub use symbols::{AliasBinding, DefId, SymbolTable};
