//! Bootstrap manifest (`stoke.toml`).
//!
//! ```toml
//! app_path = "app"
//! classes_dir = "classes"
//! extension = "unit"
//! core_namespaces = ["Stoke\\Core"]
//!
//! [classes]
//! "Legacy\\Thing" = "vendor/legacy/thing.unit"
//!
//! [[namespaces]]
//! prefix = "App\\Models"
//! path = "src/models"
//! ```
//!
//! Relative paths are resolved against the manifest's directory. Settings
//! are layered: built-in defaults, then the manifest, then the environment
//! (`STOKE_APP_PATH`, `STOKE_EXTENSION`), then command-line flags.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use stoke_diagnostic::{DiagnosticSink, ErrorCode};
use stoke_loader::{Loader, LoaderConfig, UnitSource};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "stoke.toml";

/// Environment variable overriding `app_path`.
pub const ENV_APP_PATH: &str = "STOKE_APP_PATH";

/// Environment variable overriding `extension`.
pub const ENV_EXTENSION: &str = "STOKE_EXTENSION";

/// Errors reading or validating a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("cannot read manifest `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest `{}`: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid manifest `{}`: namespace prefix `{prefix}` is registered twice", path.display())]
    DuplicateNamespace { path: PathBuf, prefix: String },

    #[error("invalid extension `{value}`: must not contain a path separator")]
    InvalidExtension { value: String },
}

impl ManifestError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::L0008
    }
}

/// One `[[namespaces]]` entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamespaceEntry {
    pub prefix: String,
    pub path: PathBuf,
}

/// Parsed manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub app_path: Option<PathBuf>,
    pub classes_dir: Option<PathBuf>,
    pub extension: Option<String>,
    #[serde(default)]
    pub core_namespaces: Vec<String>,
    #[serde(default)]
    pub classes: BTreeMap<String, PathBuf>,
    #[serde(default)]
    pub namespaces: Vec<NamespaceEntry>,
}

impl Manifest {
    /// Read and parse a manifest, resolving relative paths against its
    /// directory.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&text, path, base)
    }

    /// Parse manifest text. `origin` names the manifest in errors; relative
    /// paths are joined onto `base`.
    pub fn parse(text: &str, origin: &Path, base: &Path) -> Result<Self, ManifestError> {
        let mut manifest: Manifest = toml::from_str(text).map_err(|source| ManifestError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        let mut seen = std::collections::HashSet::new();
        for entry in &manifest.namespaces {
            if !seen.insert(entry.prefix.as_str()) {
                return Err(ManifestError::DuplicateNamespace {
                    path: origin.to_path_buf(),
                    prefix: entry.prefix.clone(),
                });
            }
        }
        if let Some(extension) = &manifest.extension {
            validate_extension(extension)?;
        }

        manifest.rebase(base);
        tracing::debug!(
            origin = %origin.display(),
            classes = manifest.classes.len(),
            namespaces = manifest.namespaces.len(),
            "parsed manifest"
        );
        Ok(manifest)
    }

    fn rebase(&mut self, base: &Path) {
        if let Some(app_path) = &mut self.app_path {
            *app_path = base.join(&*app_path);
        }
        for path in self.classes.values_mut() {
            *path = base.join(&*path);
        }
        for entry in &mut self.namespaces {
            entry.path = base.join(&entry.path);
        }
    }

    /// Loader configuration after applying every layer.
    pub fn loader_config(&self, env: &Overrides, cli: &Overrides) -> Result<LoaderConfig, ManifestError> {
        let mut config = LoaderConfig::default();
        if let Some(app_path) = &self.app_path {
            config = config.with_app_path(app_path);
        }
        if let Some(classes_dir) = &self.classes_dir {
            config = config.with_classes_dir(classes_dir);
        }
        if let Some(extension) = &self.extension {
            config = config.with_extension(extension);
        }

        for layer in [env, cli] {
            if let Some(app_path) = &layer.app_path {
                config = config.with_app_path(app_path);
            }
            if let Some(extension) = &layer.extension {
                validate_extension(extension)?;
                config = config.with_extension(extension);
            }
        }

        Ok(config)
    }

    /// Fill a loader's registries from this manifest.
    ///
    /// Core namespaces keep their listed order: the first entry has the
    /// highest priority.
    pub fn register(&self, loader: &mut Loader) {
        loader.register_explicit_batch(&self.classes);
        loader.register_namespaces(
            self.namespaces
                .iter()
                .map(|entry| (entry.prefix.clone(), entry.path.clone())),
            false,
        );
        for prefix in &self.core_namespaces {
            loader.register_core_namespace(prefix.clone(), false);
        }
    }

    /// Build a loader from this manifest.
    pub fn build_loader(
        &self,
        config: LoaderConfig,
        source: impl UnitSource + 'static,
        sink: impl DiagnosticSink + 'static,
    ) -> Loader {
        let mut loader = Loader::new(config, source, sink);
        self.register(&mut loader);
        loader
    }
}

fn validate_extension(extension: &str) -> Result<(), ManifestError> {
    if extension.contains(['/', '\\']) {
        return Err(ManifestError::InvalidExtension {
            value: extension.to_owned(),
        });
    }
    Ok(())
}

/// Settings that can override the manifest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub app_path: Option<PathBuf>,
    pub extension: Option<String>,
}

impl Overrides {
    /// Read `STOKE_APP_PATH` and `STOKE_EXTENSION` from the process
    /// environment. Empty values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Overrides {
            app_path: get(ENV_APP_PATH).map(PathBuf::from),
            extension: get(ENV_EXTENSION),
        }
    }
}
