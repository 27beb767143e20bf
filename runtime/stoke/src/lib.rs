//! Stoke - bootstrap and command-line driver for the stoke loader
//!
//! The binary reads a `stoke.toml` manifest, fills a `Loader` from it and
//! runs one of a few commands against it:
//!
//! - `resolve`: resolve identifiers and report how each one was found
//! - `paths`: list the candidate paths for an identifier without loading
//! - `scan`: show what a unit declares
//! - `explain`: print the documentation for a diagnostic code

pub mod commands;
pub mod manifest;
mod tracing_setup;

pub use manifest::{Manifest, ManifestError, NamespaceEntry, Overrides, MANIFEST_FILE};
pub use tracing_setup::init_tracing;
