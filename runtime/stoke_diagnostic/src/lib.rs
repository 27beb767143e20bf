//! Diagnostics for the stoke loader.
//!
//! The loader never returns tracing detail to its caller. Which stage
//! resolved an identifier, which paths were probed and which aliases were
//! refused all travel through a `DiagnosticSink`:
//!
//! ```text
//! Loader ──emit(Diagnostic)──▶ DiagnosticSink
//!                               ├── TracingSink      (forward to `tracing`)
//!                               ├── DiagnosticQueue  (collect, inspect later)
//!                               └── (A, B)           (fan out to both)
//! ```
//!
//! Hard failures carry an `ErrorCode` whose documentation is embedded and
//! available through `ErrorDocs::get()`.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod sink;

pub use diagnostic::{Diagnostic, Level};
pub use error_code::{ErrorCode, ParseErrorCodeError};
pub use errors::ErrorDocs;
pub use sink::{DiagnosticQueue, DiagnosticSink, NullSink, TracingSink};
