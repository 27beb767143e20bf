//! Definitions produced by loading a unit, and their first-load hooks.

use std::fmt;
use std::sync::Arc;

use stoke_ir::{DefKind, Ident, Span};
use stoke_unit::{Declaration, InitBlock};

use crate::{LoadError, Loader};

/// Hook run once, right after a definition is first loaded on behalf of
/// the outermost resolution request.
///
/// `symbol` is the name the definition was requested under, which is an
/// alias name when the definition was reached through core aliasing. The
/// loader's state is already cleared when the hook runs, so resolutions
/// started from inside the hook are top-level requests of their own.
pub trait OnFirstLoad: Send + Sync {
    fn on_first_load(&self, symbol: &str, loader: &mut Loader) -> Result<(), LoadError>;
}

impl<F> OnFirstLoad for F
where
    F: Fn(&str, &mut Loader) -> Result<(), LoadError> + Send + Sync,
{
    fn on_first_load(&self, symbol: &str, loader: &mut Loader) -> Result<(), LoadError> {
        self(symbol, loader)
    }
}

/// Initializer of a scanned `init { require ...; }` block: resolves every
/// required identifier in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequireOnInit {
    pub requires: Vec<String>,
}

impl RequireOnInit {
    pub fn new(requires: Vec<String>) -> Self {
        RequireOnInit { requires }
    }
}

impl From<InitBlock> for RequireOnInit {
    fn from(block: InitBlock) -> Self {
        RequireOnInit::new(block.requires)
    }
}

impl OnFirstLoad for RequireOnInit {
    fn on_first_load(&self, symbol: &str, loader: &mut Loader) -> Result<(), LoadError> {
        for required in &self.requires {
            loader.resolve(required)?;
            if !loader.is_defined(required) {
                return Err(LoadError::Initializer {
                    symbol: symbol.to_owned(),
                    message: format!("required `{required}` could not be resolved"),
                });
            }
        }
        Ok(())
    }
}

/// One class, interface or trait defined by a unit.
#[derive(Clone)]
pub struct Definition {
    /// Fully-qualified name, without a leading separator.
    pub name: String,
    pub kind: DefKind,
    /// Symbols that must be defined before this one can be bound.
    pub dependencies: Vec<String>,
    pub initializer: Option<Arc<dyn OnFirstLoad>>,
    /// Location of the name in its unit, `Span::DUMMY` when built in code.
    pub span: Span,
}

impl Definition {
    pub fn new(name: &str, kind: DefKind) -> Self {
        Definition {
            name: Ident::parse(name).as_str().to_owned(),
            kind,
            dependencies: Vec::new(),
            initializer: None,
            span: Span::DUMMY,
        }
    }

    /// Shorthand for a class definition.
    pub fn class(name: &str) -> Self {
        Self::new(name, DefKind::Class)
    }

    #[must_use]
    pub fn with_dependency(mut self, dependency: &str) -> Self {
        self.dependencies
            .push(Ident::parse(dependency).as_str().to_owned());
        self
    }

    #[must_use]
    pub fn with_initializer(mut self, initializer: impl OnFirstLoad + 'static) -> Self {
        self.initializer = Some(Arc::new(initializer));
        self
    }

    pub fn has_initializer(&self) -> bool {
        self.initializer.is_some()
    }
}

impl From<Declaration> for Definition {
    fn from(decl: Declaration) -> Self {
        Definition {
            name: decl.name,
            kind: decl.kind,
            dependencies: decl.dependencies,
            initializer: decl
                .init
                .map(|block| Arc::new(RequireOnInit::from(block)) as Arc<dyn OnFirstLoad>),
            span: decl.span,
        }
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("dependencies", &self.dependencies)
            .field("has_initializer", &self.has_initializer())
            .field("span", &self.span)
            .finish()
    }
}
