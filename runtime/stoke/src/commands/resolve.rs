//! The `resolve` command.

use std::io::{self, Write};

use stoke_diagnostic::emitter::TerminalEmitter;
use stoke_diagnostic::{Diagnostic, DiagnosticQueue, DiagnosticSink, Level, TracingSink};
use stoke_loader::{LoadError, Loader, Resolution};

use super::LoaderOptions;
use crate::{ManifestError, Overrides};

/// Result of resolving one identifier.
#[derive(Debug)]
pub struct Outcome {
    pub identifier: String,
    pub result: Result<Resolution, LoadError>,
}

impl Outcome {
    pub fn is_loaded(&self) -> bool {
        matches!(&self.result, Ok(resolution) if resolution.is_loaded())
    }
}

/// Everything a `resolve` run produced.
#[derive(Debug)]
pub struct ResolveReport {
    pub outcomes: Vec<Outcome>,
    /// Diagnostics in emission order, hard failures included.
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolveReport {
    /// Identifiers that were not found or failed to load.
    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_loaded()).count()
    }

    pub fn warnings(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }

    /// Print one line per identifier to `out` and diagnostics to `emitter`.
    ///
    /// Without `trace` only warnings and errors are shown. Write errors on
    /// `out` are returned.
    pub fn render<O: Write, E: Write>(
        &self,
        out: &mut O,
        emitter: &mut TerminalEmitter<E>,
        trace: bool,
    ) -> io::Result<()> {
        for diagnostic in &self.diagnostics {
            if trace || diagnostic.level >= Level::Warning {
                emitter.emit(diagnostic);
            }
        }

        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(resolution) => writeln!(out, "{}: {resolution}", outcome.identifier)?,
                Err(err) => writeln!(out, "{}: failed [{}]", outcome.identifier, err.code())?,
            }
        }
        out.flush()?;

        emitter.emit_summary(self.failures(), self.warnings());
        emitter.flush();
        Ok(())
    }
}

/// Resolve identifiers in order with an existing loader.
///
/// `queue` must be the loader's sink (or part of it). A hard failure is
/// recorded as an error diagnostic and the loader's state is reset before
/// the next identifier.
pub fn resolve_all(loader: &mut Loader, queue: &DiagnosticQueue, identifiers: &[String]) -> ResolveReport {
    let mut errors = queue.clone();
    let mut outcomes = Vec::with_capacity(identifiers.len());

    for identifier in identifiers {
        let result = loader.resolve(identifier);
        if let Err(err) = &result {
            errors.emit(err.to_diagnostic());
            loader.reset_state();
        }
        outcomes.push(Outcome {
            identifier: identifier.clone(),
            result,
        });
    }

    ResolveReport {
        outcomes,
        diagnostics: queue.drain(),
    }
}

/// Build a loader from `options` and resolve its identifiers.
pub fn resolve_identifiers(
    options: &LoaderOptions,
    env: &Overrides,
) -> Result<ResolveReport, ManifestError> {
    let queue = DiagnosticQueue::new();
    let mut loader = options.build_loader(env, (TracingSink, queue.clone()))?;
    Ok(resolve_all(&mut loader, &queue, &options.identifiers))
}
