//! Thread-safe handle to a loader.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::{LoadError, Loader, Resolution};

/// A `Loader` behind a mutex, for hosts that resolve from several threads.
///
/// Every registration and resolution takes the lock for its whole
/// duration, so a resolution and its nested resolutions never interleave
/// with another thread's.
#[derive(Clone)]
pub struct SharedLoader {
    inner: Arc<Mutex<Loader>>,
}

impl SharedLoader {
    pub fn new(loader: Loader) -> Self {
        SharedLoader {
            inner: Arc::new(Mutex::new(loader)),
        }
    }

    /// Lock the loader for registrations or inspection.
    pub fn lock(&self) -> MutexGuard<'_, Loader> {
        self.inner.lock()
    }

    pub fn resolve(&self, identifier: &str) -> Result<Resolution, LoadError> {
        self.inner.lock().resolve(identifier)
    }

    pub fn reset_state(&self) {
        self.inner.lock().reset_state();
    }

    pub fn is_defined(&self, identifier: &str) -> bool {
        self.inner.lock().is_defined(identifier)
    }
}

impl From<Loader> for SharedLoader {
    fn from(loader: Loader) -> Self {
        SharedLoader::new(loader)
    }
}
