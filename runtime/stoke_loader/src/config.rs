//! Loader configuration.

use std::path::PathBuf;

/// Settings that shape candidate paths.
///
/// Registries are not part of the configuration; they are filled through
/// `Loader::register_*` after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Application root used by the local fallback stage.
    pub app_path: PathBuf,
    /// Directory under `app_path` holding application units.
    pub classes_dir: PathBuf,
    /// Unit file extension, without the dot.
    pub extension: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            app_path: PathBuf::from("."),
            classes_dir: PathBuf::from("classes"),
            extension: "unit".to_owned(),
        }
    }
}

impl LoaderConfig {
    /// Set the application root.
    #[must_use]
    pub fn with_app_path(mut self, app_path: impl Into<PathBuf>) -> Self {
        self.app_path = app_path.into();
        self
    }

    /// Set the classes directory under the application root.
    #[must_use]
    pub fn with_classes_dir(mut self, classes_dir: impl Into<PathBuf>) -> Self {
        self.classes_dir = classes_dir.into();
        self
    }

    /// Set the unit extension. A leading dot is ignored.
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        extension.trim_start_matches('.').clone_into(&mut self.extension);
        self
    }

    /// Root directory of the local fallback stage.
    pub fn classes_root(&self) -> PathBuf {
        self.app_path.join(&self.classes_dir)
    }
}
