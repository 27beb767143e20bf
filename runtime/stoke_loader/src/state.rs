//! In-flight marker.

/// Identifier of the outermost resolution request, if one is running.
///
/// Set when a request starts and the marker is empty, so nested requests
/// leave it alone. Only the symbol it names gets its first-load hook run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadState {
    current: Option<String>,
}

impl LoadState {
    /// Claim the marker for `identifier` if it is free.
    ///
    /// Returns whether this request is now the outermost one.
    pub fn begin(&mut self, identifier: &str) -> bool {
        if self.current.is_some() {
            return false;
        }
        self.current = Some(identifier.to_owned());
        true
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn holds(&self, identifier: &str) -> bool {
        self.current.as_deref() == Some(identifier)
    }

    /// Clear the marker if it holds `identifier`. Returns whether it did.
    pub fn release(&mut self, identifier: &str) -> bool {
        if self.holds(identifier) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
