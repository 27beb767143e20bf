//! Unit sources.
//!
//! A `UnitSource` answers two questions for the loader: does a unit exist at
//! a path, and what does it define. The loader guarantees `load` is called
//! at most once per path.

mod fs;
mod memory;

use std::path::Path;

use crate::{Definition, LoadError};

pub use fs::FsUnitSource;
pub use memory::MemoryUnitSource;

/// Where units come from.
pub trait UnitSource: Send {
    /// Whether a unit exists at `path`. Must not load anything.
    fn exists(&self, path: &Path) -> bool;

    /// Load the unit at `path` and return its definitions in source order.
    fn load(&mut self, path: &Path) -> Result<Vec<Definition>, LoadError>;
}

impl<S: UnitSource + ?Sized> UnitSource for Box<S> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn load(&mut self, path: &Path) -> Result<Vec<Definition>, LoadError> {
        (**self).load(path)
    }
}

/// Scan unit text into definitions.
fn scan_definitions(path: &Path, text: &str) -> Result<Vec<Definition>, LoadError> {
    let decls = stoke_unit::scan_unit(text).map_err(|defect| LoadError::Malformed {
        path: path.to_path_buf(),
        defect,
    })?;
    Ok(decls.definitions.into_iter().map(Definition::from).collect())
}

#[cfg(test)]
mod tests;
