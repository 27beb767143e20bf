//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output. Anything the
//! scanner does not care about (operators, numbers, `$variables`) lexes as an
//! error token and is dropped.

use logos::Logos;
use stoke_ir::Span;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[token("namespace")]
    Namespace,
    #[token("use")]
    Use,
    #[token("as")]
    As,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("trait")]
    Trait,
    #[token("extends")]
    Extends,
    #[token("implements")]
    Implements,
    #[token("init")]
    Init,
    #[token("require")]
    Require,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semi,
    #[token(",")]
    Comma,

    // Strings are lexed only so braces inside them are not counted
    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleString,
    #[regex(r"'([^'\\]|\\.)*'")]
    SingleString,

    // Possibly qualified name: `User`, `App\Models\User`, `\Jsonable`
    #[regex(r"\\?[A-Za-z_][A-Za-z0-9_]*(\\[A-Za-z_][A-Za-z0-9_]*)*")]
    Path,
}

/// A significant token with its location and text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Lexeme<'src> {
    pub kind: RawToken,
    pub span: Span,
    pub text: &'src str,
}

/// Lex a unit, dropping trivia, strings and unrecognized input.
pub(crate) fn lex(source: &str) -> Vec<Lexeme<'_>> {
    let mut lexemes = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        match token_result {
            Ok(
                RawToken::LineComment
                | RawToken::BlockComment
                | RawToken::DoubleString
                | RawToken::SingleString,
            )
            | Err(()) => {}
            Ok(kind) => lexemes.push(Lexeme {
                kind,
                span: Span::from_range(logos.span()),
                text: logos.slice(),
            }),
        }
    }

    lexemes
}
