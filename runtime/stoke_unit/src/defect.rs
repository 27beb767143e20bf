use stoke_ir::{DefKind, Span};

/// Structural defect that stops a unit from being scanned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnitDefect {
    #[error("expected a name after `{keyword}`")]
    ExpectedName { keyword: &'static str, span: Span },

    #[error("expected `;` after `{statement}`")]
    ExpectedSemicolon { statement: String, span: Span },

    #[error("{kind} `{name}` has no body")]
    ExpectedBody {
        kind: DefKind,
        name: String,
        span: Span,
    },

    #[error("{kind} name `{name}` must not be qualified")]
    QualifiedName {
        kind: DefKind,
        name: String,
        span: Span,
    },

    #[error("import alias `{alias}` must not be qualified")]
    QualifiedAlias { alias: String, span: Span },

    #[error("unclosed body for {kind} `{name}`")]
    UnclosedBody {
        kind: DefKind,
        name: String,
        span: Span,
    },

    #[error("unclosed block")]
    UnclosedBlock { span: Span },

    #[error("unexpected `}}`")]
    UnexpectedCloseBrace { span: Span },
}

impl UnitDefect {
    /// Where the defect was detected.
    pub fn span(&self) -> Span {
        match self {
            UnitDefect::ExpectedName { span, .. }
            | UnitDefect::ExpectedSemicolon { span, .. }
            | UnitDefect::ExpectedBody { span, .. }
            | UnitDefect::QualifiedName { span, .. }
            | UnitDefect::QualifiedAlias { span, .. }
            | UnitDefect::UnclosedBody { span, .. }
            | UnitDefect::UnclosedBlock { span }
            | UnitDefect::UnexpectedCloseBrace { span } => *span,
        }
    }
}
