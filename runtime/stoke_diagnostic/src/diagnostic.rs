use std::fmt;
use std::path::{Path, PathBuf};

use stoke_ir::Span;

use crate::ErrorCode;

/// Severity level for diagnostics.
///
/// Ordered from least to most severe.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Debug => write!(f, "debug"),
            Level::Info => write!(f, "info"),
            Level::Warning => write!(f, "warning"),
            Level::Error => write!(f, "error"),
        }
    }
}

/// One structured message from the loader.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be emitted, not silently dropped"]
pub struct Diagnostic {
    /// Severity level.
    pub level: Level,
    /// Code for searchability, absent for plain trace messages.
    pub code: Option<ErrorCode>,
    /// Main message.
    pub message: String,
    /// Unit the message is about, if any.
    pub path: Option<PathBuf>,
    /// Location inside that unit, if known.
    pub span: Option<Span>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Diagnostic {
            level,
            code: None,
            message: message.into(),
            path: None,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Create a debug-level trace message.
    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(Level::Debug, message)
    }

    /// Create an info-level message.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    /// Create a warning with a code.
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message).with_code(code)
    }

    /// Create an error with a code.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(Level::Error, message).with_code(code)
    }

    /// Attach an error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach the unit path the message is about.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Attach a location inside the unit.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Check if this is an error (vs warning/info/debug).
    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder() {
        let diag = Diagnostic::error(ErrorCode::L0002, "unbalanced braces")
            .with_path("app/classes/User.unit")
            .with_span(Span::new(3, 9))
            .with_note("opened here");

        assert!(diag.is_error());
        assert_eq!(diag.code, Some(ErrorCode::L0002));
        assert_eq!(diag.path, Some(PathBuf::from("app/classes/User.unit")));
        assert_eq!(diag.span, Some(Span::new(3, 9)));
        assert_eq!(diag.notes, vec!["opened here".to_string()]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Diagnostic::warning(ErrorCode::L0005, "alias refused").to_string(),
            "warning[L0005]: alias refused"
        );
        assert_eq!(
            Diagnostic::debug("probing a/B.unit").to_string(),
            "debug: probing a/B.unit"
        );
    }

    #[test]
    fn test_level_order() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warning < Level::Error);
    }
}
