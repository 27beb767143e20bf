use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::{scan_definitions, UnitSource};
use crate::{Definition, LoadError};

enum MemoryUnit {
    Text(String),
    Definitions(Vec<Definition>),
}

#[derive(Default)]
struct Inner {
    units: FxHashMap<PathBuf, MemoryUnit>,
    loads: FxHashMap<PathBuf, usize>,
}

/// Units held in memory, keyed by path.
///
/// Clones share the same units and load counters, so a test can hand one
/// clone to the loader and keep another to add units or count loads.
#[derive(Clone, Default)]
pub struct MemoryUnitSource {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryUnitSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a unit given as unit text. It is scanned on load.
    pub fn add_text(&self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.inner
            .lock()
            .units
            .insert(path.into(), MemoryUnit::Text(text.into()));
    }

    /// Add a unit given as prebuilt definitions.
    pub fn add_definitions(&self, path: impl Into<PathBuf>, definitions: Vec<Definition>) {
        self.inner
            .lock()
            .units
            .insert(path.into(), MemoryUnit::Definitions(definitions));
    }

    /// How often `path` was loaded.
    pub fn load_count(&self, path: impl AsRef<Path>) -> usize {
        self.inner
            .lock()
            .loads
            .get(path.as_ref())
            .copied()
            .unwrap_or(0)
    }

    /// Loads across all paths.
    pub fn total_loads(&self) -> usize {
        self.inner.lock().loads.values().sum()
    }
}

impl UnitSource for MemoryUnitSource {
    fn exists(&self, path: &Path) -> bool {
        self.inner.lock().units.contains_key(path)
    }

    fn load(&mut self, path: &Path) -> Result<Vec<Definition>, LoadError> {
        let mut inner = self.inner.lock();
        *inner.loads.entry(path.to_path_buf()).or_insert(0) += 1;

        match inner.units.get(path) {
            Some(MemoryUnit::Definitions(definitions)) => Ok(definitions.clone()),
            Some(MemoryUnit::Text(text)) => scan_definitions(path, text),
            None => Err(LoadError::Unreadable {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}

impl std::fmt::Debug for MemoryUnitSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        let mut paths: Vec<_> = inner.units.keys().collect();
        paths.sort();
        f.debug_struct("MemoryUnitSource")
            .field("units", &paths)
            .field("loads", &inner.loads.values().sum::<usize>())
            .finish()
    }
}
