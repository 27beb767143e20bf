//! Command handlers for the stoke CLI.
//!
//! Handlers write their regular output to a caller-supplied writer and
//! return structured results, so `main.rs` only decides on exit codes.

use std::path::{Path, PathBuf};

use stoke_diagnostic::DiagnosticSink;
use stoke_loader::{FsUnitSource, Loader};

use crate::{Manifest, ManifestError, Overrides, MANIFEST_FILE};

mod explain;
mod paths;
mod resolve;
mod scan;

pub use explain::explain_code;
pub use paths::print_paths;
pub use resolve::{resolve_all, resolve_identifiers, Outcome, ResolveReport};
pub use scan::{scan_file, ScannedUnit};

/// Options shared by commands that build a loader.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Manifest to read; `stoke.toml` in the working directory if absent.
    pub manifest: Option<PathBuf>,
    /// `--app-path`, the highest-priority layer.
    pub app_path: Option<PathBuf>,
    /// Print every collected diagnostic, not just warnings and errors.
    pub trace: bool,
    /// Positional arguments.
    pub identifiers: Vec<String>,
}

impl LoaderOptions {
    /// Parse command arguments (everything after the command name).
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = LoaderOptions::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            if let Some(value) = arg.strip_prefix("--manifest=") {
                options.manifest = Some(PathBuf::from(value));
            } else if let Some(value) = arg.strip_prefix("--app-path=") {
                options.app_path = Some(PathBuf::from(value));
            } else if arg == "--manifest" {
                let value = iter.next().ok_or("--manifest requires a file")?;
                options.manifest = Some(PathBuf::from(value));
            } else if arg == "--app-path" {
                let value = iter.next().ok_or("--app-path requires a directory")?;
                options.app_path = Some(PathBuf::from(value));
            } else if arg == "--trace" {
                options.trace = true;
            } else if arg.starts_with("--") {
                return Err(format!("unknown option `{arg}`"));
            } else {
                options.identifiers.push(arg.clone());
            }
        }

        Ok(options)
    }

    /// Read the manifest, falling back to defaults when none exists.
    pub fn load_manifest(&self) -> Result<Manifest, ManifestError> {
        match &self.manifest {
            Some(path) => Manifest::load(path),
            None => {
                let default = Path::new(MANIFEST_FILE);
                if default.is_file() {
                    Manifest::load(default)
                } else {
                    Ok(Manifest::default())
                }
            }
        }
    }

    /// Build a filesystem loader from the manifest and every override layer.
    pub fn build_loader(
        &self,
        env: &Overrides,
        sink: impl DiagnosticSink + 'static,
    ) -> Result<Loader, ManifestError> {
        let manifest = self.load_manifest()?;
        let cli = Overrides {
            app_path: self.app_path.clone(),
            extension: None,
        };
        let config = manifest.loader_config(env, &cli)?;
        Ok(manifest.build_loader(config, FsUnitSource, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_parse_options() {
        let options = LoaderOptions::parse(&args(&[
            "--manifest",
            "conf/stoke.toml",
            "--trace",
            "App\\User",
            "--app-path=/srv/app",
            "Arr",
        ]))
        .unwrap();

        assert_eq!(
            options,
            LoaderOptions {
                manifest: Some("conf/stoke.toml".into()),
                app_path: Some("/srv/app".into()),
                trace: true,
                identifiers: vec!["App\\User".into(), "Arr".into()],
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_and_incomplete_options() {
        assert_eq!(
            LoaderOptions::parse(&args(&["--verbose"])),
            Err("unknown option `--verbose`".to_owned())
        );
        assert_eq!(
            LoaderOptions::parse(&args(&["--manifest"])),
            Err("--manifest requires a file".to_owned())
        );
    }
}
