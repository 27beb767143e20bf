//! Embedded error documentation for `stoke explain` support.
//!
//! Each code has a markdown file in this directory. They are embedded at
//! compile time and accessed via `ErrorDocs::get()`.

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (ErrorCode::L0001, include_str!("L0001.md")),
    (ErrorCode::L0002, include_str!("L0002.md")),
    (ErrorCode::L0003, include_str!("L0003.md")),
    (ErrorCode::L0004, include_str!("L0004.md")),
    (ErrorCode::L0005, include_str!("L0005.md")),
    (ErrorCode::L0006, include_str!("L0006.md")),
    (ErrorCode::L0007, include_str!("L0007.md")),
    (ErrorCode::L0008, include_str!("L0008.md")),
    (ErrorCode::W0001, include_str!("W0001.md")),
];
