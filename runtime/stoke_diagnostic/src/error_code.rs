use std::fmt;
use std::str::FromStr;

/// Error codes for loader diagnostics.
///
/// Format: L#### for loader errors, W#### for warnings that never fail a
/// resolution.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unit exists but cannot be read
    L0001,
    /// Unit text is structurally malformed
    L0002,
    /// Unit redeclares an already defined symbol
    L0003,
    /// Definition depends on a symbol that cannot be resolved
    L0004,
    /// Alias name already bound to a different definition
    L0005,
    /// Alias source cannot be resolved
    L0006,
    /// Initializer failed
    L0007,
    /// Invalid bootstrap manifest
    L0008,

    /// Explicit override points at a missing unit
    W0001,
}

/// Every code, in documentation order.
const ALL: &[ErrorCode] = &[
    ErrorCode::L0001,
    ErrorCode::L0002,
    ErrorCode::L0003,
    ErrorCode::L0004,
    ErrorCode::L0005,
    ErrorCode::L0006,
    ErrorCode::L0007,
    ErrorCode::L0008,
    ErrorCode::W0001,
];

impl ErrorCode {
    /// Get the code as a string (e.g., "L0002").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::L0001 => "L0001",
            ErrorCode::L0002 => "L0002",
            ErrorCode::L0003 => "L0003",
            ErrorCode::L0004 => "L0004",
            ErrorCode::L0005 => "L0005",
            ErrorCode::L0006 => "L0006",
            ErrorCode::L0007 => "L0007",
            ErrorCode::L0008 => "L0008",
            ErrorCode::W0001 => "W0001",
        }
    }

    /// Check if this is a warning code (Wxxxx range).
    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }

    /// All known codes.
    pub fn all() -> impl Iterator<Item = ErrorCode> {
        ALL.iter().copied()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unknown error code string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseErrorCodeError(String);

impl fmt::Display for ParseErrorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code `{}`", self.0)
    }
}

impl std::error::Error for ParseErrorCodeError {}

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL.iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseErrorCodeError(wanted.to_owned()))
    }
}

#[cfg(test)]
mod tests;
