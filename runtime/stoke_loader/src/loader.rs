//! The resolver/loader.
//!
//! # Lookup stages
//!
//! 1. **Explicit**: a registered override whose unit exists
//! 2. **Namespace**: the first registry entry whose prefix matches the
//!    identifier's namespace, exact path then lowercased path
//! 3. **Local**: `app_path/classes_dir/<encoded identifier>`, exact then
//!    lowercased
//! 4. **Core**: unqualified identifiers only; alias the identifier to
//!    `core_prefix\identifier` once that resolves
//!
//! A stage succeeds only when the loaded unit defines the requested
//! identifier. Units that define other symbols as a byproduct still get
//! those symbols bound.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use stoke_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode, TracingSink};
use stoke_ir::{normalize_namespace, qualify, Ident};

use crate::paths::{encode, lowercase_variant};
use crate::{
    AliasBinding, CoreNamespaces, Definition, ExplicitRegistry, FsUnitSource, LoadError,
    LoadState, LoaderConfig, NamespaceRegistry, SymbolTable, UnitSource,
};

/// Lookup stage that produced a unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stage {
    Explicit,
    Namespace,
    Local,
    Core,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Explicit => "explicit",
            Stage::Namespace => "namespace",
            Stage::Local => "local",
            Stage::Core => "core",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a resolution that did not hit a hard failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The identifier was already bound; nothing was probed.
    AlreadyDefined,
    /// A unit defining the identifier was loaded.
    Loaded { stage: Stage, path: PathBuf },
    /// The unqualified identifier was bound as an alias of a core symbol.
    Aliased { canonical: String },
    /// No stage produced the identifier.
    NotFound,
}

impl Resolution {
    /// Whether the identifier is defined after this resolution.
    pub fn is_loaded(&self) -> bool {
        !matches!(self, Resolution::NotFound)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::AlreadyDefined => f.write_str("already defined"),
            Resolution::Loaded { stage, path } => {
                write!(f, "loaded from {} ({stage} stage)", path.display())
            }
            Resolution::Aliased { canonical } => write!(f, "aliased to `{canonical}`"),
            Resolution::NotFound => f.write_str("not found"),
        }
    }
}

/// One candidate path a resolution would probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Probe {
    pub stage: Stage,
    pub path: PathBuf,
    pub exists: bool,
}

/// Outcome of `Loader::alias_to_namespace`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AliasOutcome {
    /// The alias name is now bound.
    Created { alias: String },
    /// The alias name already denoted the same definition.
    Unchanged,
    /// The alias name denotes a different definition, named here.
    Conflict { existing: String },
    /// The source identifier is not defined and could not be resolved.
    SourceMissing,
}

/// Resolves identifiers to units and loads them.
pub struct Loader {
    config: LoaderConfig,
    explicit: ExplicitRegistry,
    namespaces: NamespaceRegistry,
    core: CoreNamespaces,
    symbols: SymbolTable,
    state: LoadState,
    /// Paths the source loaded successfully, in load order.
    loaded: IndexSet<PathBuf>,
    /// Scanned definitions whose binding failed, retried on the next load
    /// of the same path.
    pending: FxHashMap<PathBuf, Vec<Definition>>,
    source: Box<dyn UnitSource>,
    sink: Box<dyn DiagnosticSink>,
}

impl Loader {
    pub fn new(
        config: LoaderConfig,
        source: impl UnitSource + 'static,
        sink: impl DiagnosticSink + 'static,
    ) -> Self {
        Loader {
            config,
            explicit: ExplicitRegistry::default(),
            namespaces: NamespaceRegistry::default(),
            core: CoreNamespaces::default(),
            symbols: SymbolTable::new(),
            state: LoadState::default(),
            loaded: IndexSet::new(),
            pending: FxHashMap::default(),
            source: Box::new(source),
            sink: Box::new(sink),
        }
    }

    /// Loader over the filesystem that reports through `tracing`.
    pub fn filesystem(config: LoaderConfig) -> Self {
        Self::new(config, FsUnitSource, TracingSink)
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    // Registration

    /// Map one identifier straight to a unit path. The path is not checked.
    pub fn register_explicit(&mut self, identifier: &str, path: impl Into<PathBuf>) {
        self.explicit.insert(identifier, path.into());
    }

    /// `register_explicit` for each entry, in iteration order.
    pub fn register_explicit_batch<I, K, P>(&mut self, mapping: I)
    where
        I: IntoIterator<Item = (K, P)>,
        K: AsRef<str>,
        P: Into<PathBuf>,
    {
        for (identifier, path) in mapping {
            self.register_explicit(identifier.as_ref(), path);
        }
    }

    /// Map a namespace prefix to a base directory.
    pub fn register_namespace(&mut self, prefix: impl Into<String>, base: impl Into<PathBuf>) {
        self.namespaces.insert(prefix.into(), base.into());
    }

    /// Merge a batch of namespace mappings, ahead of existing entries when
    /// `prepend` is set.
    pub fn register_namespaces<I, K, P>(&mut self, mapping: I, prepend: bool)
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<PathBuf>,
    {
        self.namespaces.merge(
            mapping.into_iter().map(|(k, p)| (k.into(), p.into())),
            prepend,
        );
    }

    /// Base directory registered for exactly `prefix`.
    pub fn namespace_path(&self, prefix: &str) -> Option<&Path> {
        self.namespaces.get(prefix)
    }

    pub fn register_core_namespace(&mut self, prefix: impl Into<String>, high_priority: bool) {
        self.core.insert(prefix.into(), high_priority);
    }

    /// Bind `target_namespace\tail(identifier)` to the definition of
    /// `identifier`, resolving `identifier` first if needed. An empty target
    /// is the root namespace.
    pub fn alias_to_namespace(
        &mut self,
        identifier: &str,
        target_namespace: &str,
    ) -> Result<AliasOutcome, LoadError> {
        let ident = Ident::parse(identifier);
        let alias = qualify(target_namespace, ident.tail());

        self.resolve(ident.as_str())?;
        let Some(id) = self.symbols.lookup(ident.as_str()) else {
            self.sink.emit(Diagnostic::warning(
                ErrorCode::L0006,
                format!("cannot alias `{ident}`: it is not defined and could not be resolved"),
            ));
            return Ok(AliasOutcome::SourceMissing);
        };

        match self.symbols.alias(&alias, id) {
            AliasBinding::Created => {
                self.trace(format!("aliased `{ident}` to `{alias}`"));
                Ok(AliasOutcome::Created { alias })
            }
            AliasBinding::Unchanged => Ok(AliasOutcome::Unchanged),
            AliasBinding::Conflict(other) => {
                let existing = self.symbols.get(other).name.clone();
                self.sink.emit(Diagnostic::warning(
                    ErrorCode::L0005,
                    format!("cannot alias `{ident}` to `{alias}`: `{alias}` already names `{existing}`"),
                ));
                Ok(AliasOutcome::Conflict { existing })
            }
        }
    }

    // Resolution

    /// Resolve `identifier`, loading whatever unit defines it.
    ///
    /// Not finding the identifier is `Ok(Resolution::NotFound)`. `Err` means
    /// a unit was found but could not be loaded; the in-flight marker is
    /// left as it was.
    pub fn resolve(&mut self, identifier: &str) -> Result<Resolution, LoadError> {
        let ident = Ident::parse(identifier);
        let identifier = ident.as_str();
        let span = tracing::debug_span!("resolve", identifier);
        let _enter = span.enter();

        if self.symbols.is_bound(identifier) {
            return Ok(Resolution::AlreadyDefined);
        }

        let outermost = self.state.begin(identifier);
        let resolution = self.run_stages(ident)?;
        self.state.release(identifier);

        tracing::debug!(%resolution, outermost, "resolved");
        Ok(resolution)
    }

    /// Forget the in-flight marker. Call after a hard failure before
    /// resolving anything else.
    pub fn reset_state(&mut self) {
        if let Some(current) = self.state.current() {
            let message = format!("reset in-flight marker for `{current}`");
            self.trace(message);
        }
        self.state.clear();
    }

    // Inspection

    pub fn is_defined(&self, identifier: &str) -> bool {
        self.symbols.is_bound(Ident::parse(identifier).as_str())
    }

    /// Definition bound to `identifier`, following aliases.
    pub fn definition(&self, identifier: &str) -> Option<&Definition> {
        self.symbols.definition(Ident::parse(identifier).as_str())
    }

    /// Identifier of the outermost request in flight.
    pub fn in_flight(&self) -> Option<&str> {
        self.state.current()
    }

    pub fn namespaces(&self) -> &NamespaceRegistry {
        &self.namespaces
    }

    pub fn core_namespaces(&self) -> &CoreNamespaces {
        &self.core
    }

    pub fn explicit(&self) -> &ExplicitRegistry {
        &self.explicit
    }

    pub fn explicit_path(&self, identifier: &str) -> Option<&Path> {
        self.explicit.get(identifier)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Unit paths the source has read successfully, in load order.
    pub fn loaded_paths(&self) -> impl Iterator<Item = &Path> {
        self.loaded.iter().map(PathBuf::as_path)
    }

    /// The paths stages 1 to 3 would probe for `identifier`, without
    /// loading anything.
    pub fn candidates(&self, identifier: &str) -> Vec<Probe> {
        let ident = Ident::parse(identifier);
        let mut probes = Vec::new();

        if let Some(path) = self.explicit.get(ident.as_str()) {
            probes.push(self.probe(Stage::Explicit, path.to_path_buf()));
        }
        if ident.is_qualified() {
            if let Some((_, path)) = self.namespace_candidate(&ident) {
                self.push_variants(&mut probes, Stage::Namespace, path);
            }
        }
        self.push_variants(&mut probes, Stage::Local, self.local_candidate(ident.as_str()));

        probes
    }

    fn probe(&self, stage: Stage, path: PathBuf) -> Probe {
        let exists = self.source.exists(&path);
        Probe {
            stage,
            path,
            exists,
        }
    }

    fn push_variants(&self, probes: &mut Vec<Probe>, stage: Stage, exact: PathBuf) {
        let lower = lowercase_variant(&exact);
        probes.push(self.probe(stage, exact));
        if let Some(lower) = lower {
            probes.push(self.probe(stage, lower));
        }
    }

    // Stages

    fn trace(&mut self, message: impl Into<String>) {
        self.sink.emit(Diagnostic::debug(message));
    }

    fn run_stages(&mut self, ident: Ident<'_>) -> Result<Resolution, LoadError> {
        let identifier = ident.as_str();

        if let Some(path) = self.explicit.get(identifier).map(Path::to_path_buf) {
            if self.source.exists(&path) {
                self.trace(format!("explicit: loading `{identifier}` from {}", path.display()));
                if self.load_unit(identifier, &path)? {
                    return Ok(Resolution::Loaded {
                        stage: Stage::Explicit,
                        path,
                    });
                }
            } else {
                self.sink.emit(
                    Diagnostic::warning(
                        ErrorCode::W0001,
                        format!(
                            "explicit path for `{identifier}` does not exist: {}",
                            path.display()
                        ),
                    )
                    .with_path(&path),
                );
            }
        }

        if ident.is_qualified() {
            if let Some((prefix, exact)) = self.namespace_candidate(&ident) {
                self.trace(format!("namespace: `{identifier}` matches prefix `{prefix}`"));
                if let Some(path) = self.try_variants(identifier, Stage::Namespace, exact)? {
                    return Ok(Resolution::Loaded {
                        stage: Stage::Namespace,
                        path,
                    });
                }
            }
        }

        let exact = self.local_candidate(identifier);
        if let Some(path) = self.try_variants(identifier, Stage::Local, exact)? {
            return Ok(Resolution::Loaded {
                stage: Stage::Local,
                path,
            });
        }

        if !ident.is_qualified() {
            if let Some(resolution) = self.try_core(identifier)? {
                return Ok(resolution);
            }
        }

        self.trace(format!("`{identifier}` not found"));
        Ok(Resolution::NotFound)
    }

    /// Prefix and exact path of the first matching namespace entry.
    fn namespace_candidate(&self, ident: &Ident<'_>) -> Option<(String, PathBuf)> {
        let found = self.namespaces.first_match(ident)?;
        let path = found.base.join(encode(found.rest, &self.config.extension));
        Some((found.prefix.to_owned(), path))
    }

    fn local_candidate(&self, identifier: &str) -> PathBuf {
        self.config
            .classes_root()
            .join(encode(identifier, &self.config.extension))
    }

    /// Probe the exact path, then its lowercase variant, and load the first
    /// that exists. Returns the path when it defined `identifier`.
    fn try_variants(
        &mut self,
        identifier: &str,
        stage: Stage,
        exact: PathBuf,
    ) -> Result<Option<PathBuf>, LoadError> {
        let path = if self.source.exists(&exact) {
            exact
        } else {
            self.trace(format!("{stage}: no unit at {}", exact.display()));
            match lowercase_variant(&exact) {
                Some(lower) if self.source.exists(&lower) => lower,
                Some(lower) => {
                    self.trace(format!("{stage}: no unit at {}", lower.display()));
                    return Ok(None);
                }
                None => return Ok(None),
            }
        };

        self.trace(format!("{stage}: loading `{identifier}` from {}", path.display()));
        Ok(self.load_unit(identifier, &path)?.then_some(path))
    }

    fn try_core(&mut self, identifier: &str) -> Result<Option<Resolution>, LoadError> {
        let prefixes: Vec<String> = self
            .core
            .iter()
            .filter(|p| !normalize_namespace(p).is_empty())
            .map(str::to_owned)
            .collect();

        for prefix in prefixes {
            let candidate = qualify(&prefix, identifier);
            self.resolve(&candidate)?;

            if self.symbols.is_bound(identifier) {
                self.trace(format!(
                    "core: `{identifier}` was defined while resolving `{candidate}`"
                ));
                return Ok(Some(Resolution::AlreadyDefined));
            }
            let Some(id) = self.symbols.lookup(&candidate) else {
                continue;
            };

            self.symbols.alias(identifier, id);
            let canonical = self.symbols.get(id).name.clone();
            self.trace(format!("core: `{identifier}` aliased to `{canonical}`"));
            self.init_symbol(identifier)?;
            return Ok(Some(Resolution::Aliased { canonical }));
        }

        Ok(None)
    }

    // Loading

    /// Load one unit and bind its definitions. Returns whether it defined
    /// `identifier`.
    ///
    /// The source is asked for each path at most once per successful read.
    /// A read or scan failure leaves the path unrecorded, so the next attempt
    /// reports the defect again. A binding failure keeps the scanned
    /// definitions and retries them on the next attempt.
    fn load_unit(&mut self, identifier: &str, path: &Path) -> Result<bool, LoadError> {
        let definitions = if let Some(definitions) = self.pending.remove(path) {
            self.trace(format!("{}: retrying definitions that failed to bind", path.display()));
            definitions
        } else if self.loaded.contains(path) {
            self.trace(format!("{} is already loaded", path.display()));
            return Ok(false);
        } else {
            let definitions = self.source.load(path)?;
            self.loaded.insert(path.to_path_buf());
            definitions
        };

        if let Err(err) = self.check_bindable(path, &definitions) {
            self.pending.insert(path.to_path_buf(), definitions);
            return Err(err);
        }

        let mut defined = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let name = definition.name.clone();
            if self.symbols.define(definition).is_err() {
                return Err(LoadError::Redeclared {
                    symbol: name,
                    path: path.to_path_buf(),
                });
            }
            defined.push(name);
        }
        self.trace(format!(
            "{} defined {}",
            path.display(),
            if defined.is_empty() {
                "nothing".to_owned()
            } else {
                defined.join(", ")
            }
        ));

        for name in &defined {
            self.init_symbol(name)?;
        }
        Ok(defined.iter().any(|name| name == identifier))
    }

    /// Resolve outside dependencies of `definitions` and make sure none of
    /// their names is already bound.
    fn check_bindable(&mut self, path: &Path, definitions: &[Definition]) -> Result<(), LoadError> {
        let local: FxHashSet<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
        for definition in definitions {
            for dependency in &definition.dependencies {
                if local.contains(dependency.as_str()) || self.symbols.is_bound(dependency) {
                    continue;
                }
                self.resolve(dependency)?;
                if !self.symbols.is_bound(dependency) {
                    return Err(LoadError::MissingDependency {
                        symbol: definition.name.clone(),
                        dependency: dependency.clone(),
                        path: path.to_path_buf(),
                    });
                }
            }
        }

        if let Some(taken) = definitions.iter().find(|d| self.symbols.is_bound(&d.name)) {
            return Err(LoadError::Redeclared {
                symbol: taken.name.clone(),
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    /// Run the first-load hook of `symbol` if it is the outermost request.
    fn init_symbol(&mut self, symbol: &str) -> Result<(), LoadError> {
        if !self.state.release(symbol) {
            return Ok(());
        }
        let Some(initializer) = self
            .symbols
            .definition(symbol)
            .and_then(|d| d.initializer.clone())
        else {
            return Ok(());
        };

        self.trace(format!("running initializer for `{symbol}`"));
        initializer.on_first_load(symbol, self)
    }
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Loader")
            .field("config", &self.config)
            .field("explicit", &self.explicit)
            .field("namespaces", &self.namespaces)
            .field("core", &self.core)
            .field("symbols", &self.symbols.binding_count())
            .field("state", &self.state)
            .field("loaded", &self.loaded)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}
