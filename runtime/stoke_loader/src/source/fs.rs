use std::path::Path;

use super::{scan_definitions, UnitSource};
use crate::{Definition, LoadError};

/// Units read from the filesystem and scanned as unit text.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsUnitSource;

impl UnitSource for FsUnitSource {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load(&mut self, path: &Path) -> Result<Vec<Definition>, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::trace!(path = %path.display(), bytes = text.len(), "read unit");
        scan_definitions(path, &text)
    }
}
