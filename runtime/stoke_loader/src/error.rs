use std::io;
use std::path::PathBuf;

use stoke_diagnostic::{Diagnostic, ErrorCode};
use stoke_unit::UnitDefect;

/// Hard failure while loading a unit.
///
/// A failure aborts the whole resolution, including any outer request that
/// triggered it, and leaves the in-flight marker set. Hosts that carry on
/// afterwards call `Loader::reset_state`.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read unit `{}`: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed unit `{}`: {defect}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        defect: UnitDefect,
    },

    #[error("`{symbol}` declared in `{}` is already defined", path.display())]
    Redeclared { symbol: String, path: PathBuf },

    #[error("`{symbol}` depends on `{dependency}`, which could not be resolved")]
    MissingDependency {
        symbol: String,
        dependency: String,
        path: PathBuf,
    },

    #[error("initializer for `{symbol}` failed: {message}")]
    Initializer { symbol: String, message: String },
}

impl LoadError {
    /// Failure reported by a first-load hook.
    pub fn initializer(symbol: &str, message: impl Into<String>) -> Self {
        LoadError::Initializer {
            symbol: symbol.to_owned(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LoadError::Unreadable { .. } => ErrorCode::L0001,
            LoadError::Malformed { .. } => ErrorCode::L0002,
            LoadError::Redeclared { .. } => ErrorCode::L0003,
            LoadError::MissingDependency { .. } => ErrorCode::L0004,
            LoadError::Initializer { .. } => ErrorCode::L0007,
        }
    }

    /// Unit the failure is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            LoadError::Unreadable { path, .. }
            | LoadError::Malformed { path, .. }
            | LoadError::Redeclared { path, .. }
            | LoadError::MissingDependency { path, .. } => Some(path),
            LoadError::Initializer { .. } => None,
        }
    }

    /// Render as an error diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code(), self.to_string());
        if let Some(path) = self.path() {
            diag = diag.with_path(path);
        }
        if let LoadError::Malformed { defect, .. } = self {
            diag = diag.with_span(defect.span());
        }
        diag
    }
}
