//! Declaration scanner.
//!
//! Walks the significant tokens of a unit once. Top-level statements are
//! `namespace`, `use` and definitions; everything else at top level is
//! skipped, with `{ ... }` blocks skipped as a whole. Definition bodies are
//! only brace-matched, except for an `init { ... }` block directly inside
//! them.

use rustc_hash::FxHashMap;
use stoke_ir::{qualify, DefKind, Span, NAMESPACE_SEPARATOR};

use crate::token::{lex, Lexeme, RawToken};
use crate::{Declaration, InitBlock, UnitDecls, UnitDefect};

/// Scan a unit's declarations.
pub fn scan_unit(source: &str) -> Result<UnitDecls, UnitDefect> {
    Scanner::new(source).run()
}

struct Scanner<'src> {
    tokens: Vec<Lexeme<'src>>,
    pos: usize,
    /// Current namespace, without surrounding separators.
    namespace: String,
    /// Import alias → fully-qualified name, reset by each `namespace`.
    imports: FxHashMap<String, String>,
}

impl<'src> Scanner<'src> {
    fn new(source: &'src str) -> Self {
        Scanner {
            tokens: lex(source),
            pos: 0,
            namespace: String::new(),
            imports: FxHashMap::default(),
        }
    }

    fn run(mut self) -> Result<UnitDecls, UnitDefect> {
        let mut decls = UnitDecls::default();

        while let Some(tok) = self.bump() {
            match tok.kind {
                RawToken::Namespace => {
                    let path = self.expect_path("namespace", tok.span)?;
                    self.expect_semi(|| format!("namespace {}", path.text), path.span)?;
                    self.namespace = path.text.trim_matches(NAMESPACE_SEPARATOR).to_owned();
                    self.imports.clear();
                }
                RawToken::Use => self.import(tok.span)?,
                RawToken::Class => decls.definitions.push(self.definition(DefKind::Class, tok)?),
                RawToken::Interface => {
                    decls
                        .definitions
                        .push(self.definition(DefKind::Interface, tok)?);
                }
                RawToken::Trait => decls.definitions.push(self.definition(DefKind::Trait, tok)?),
                RawToken::LBrace => self.skip_block(tok.span)?,
                RawToken::RBrace => {
                    return Err(UnitDefect::UnexpectedCloseBrace { span: tok.span });
                }
                _ => {}
            }
        }

        Ok(decls)
    }

    #[inline]
    fn bump(&mut self) -> Option<Lexeme<'src>> {
        let tok = self.tokens.get(self.pos).copied();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    #[inline]
    fn peek(&self) -> Option<RawToken> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    fn expect_path(&mut self, keyword: &'static str, after: Span) -> Result<Lexeme<'src>, UnitDefect> {
        match self.peek() {
            Some(RawToken::Path) => self.bump().ok_or(UnitDefect::ExpectedName {
                keyword,
                span: after,
            }),
            _ => Err(UnitDefect::ExpectedName {
                keyword,
                span: after,
            }),
        }
    }

    fn expect_semi(&mut self, statement: impl FnOnce() -> String, after: Span) -> Result<(), UnitDefect> {
        if self.peek() == Some(RawToken::Semi) {
            self.pos += 1;
            Ok(())
        } else {
            Err(UnitDefect::ExpectedSemicolon {
                statement: statement(),
                span: after,
            })
        }
    }

    /// `use Path;` or `use Path as Alias;`
    fn import(&mut self, keyword: Span) -> Result<(), UnitDefect> {
        let path = self.expect_path("use", keyword)?;
        let full = path.text.trim_start_matches(NAMESPACE_SEPARATOR).to_owned();

        let (alias, last) = if self.peek() == Some(RawToken::As) {
            let as_tok = self.bump().map_or(path.span, |t| t.span);
            let alias = self.expect_path("as", as_tok)?;
            if alias.text.contains(NAMESPACE_SEPARATOR) {
                return Err(UnitDefect::QualifiedAlias {
                    alias: alias.text.to_owned(),
                    span: alias.span,
                });
            }
            (alias.text.to_owned(), alias)
        } else {
            let tail = full
                .rsplit(NAMESPACE_SEPARATOR)
                .next()
                .unwrap_or(full.as_str())
                .to_owned();
            (tail, path)
        };

        self.expect_semi(|| format!("use {}", path.text), last.span)?;
        self.imports.insert(alias, full);
        Ok(())
    }

    /// Resolve a name as written in the unit to a fully-qualified name.
    fn qualify_name(&self, written: &str) -> String {
        if let Some(absolute) = written.strip_prefix(NAMESPACE_SEPARATOR) {
            return absolute.to_owned();
        }

        let (head, rest) = match written.split_once(NAMESPACE_SEPARATOR) {
            Some((head, rest)) => (head, Some(rest)),
            None => (written, None),
        };
        if let Some(imported) = self.imports.get(head) {
            return match rest {
                Some(rest) => qualify(imported, rest),
                None => imported.clone(),
            };
        }

        qualify(&self.namespace, written)
    }

    fn definition(&mut self, kind: DefKind, keyword: Lexeme<'src>) -> Result<Declaration, UnitDefect> {
        let name_tok = self.expect_path(kind.keyword(), keyword.span)?;
        if name_tok.text.contains(NAMESPACE_SEPARATOR) {
            return Err(UnitDefect::QualifiedName {
                kind,
                name: name_tok.text.to_owned(),
                span: name_tok.span,
            });
        }
        let name = qualify(&self.namespace, name_tok.text);

        let mut dependencies = Vec::new();
        loop {
            match self.peek() {
                Some(RawToken::Extends) => {
                    let tok = self.bump().map_or(name_tok.span, |t| t.span);
                    self.path_list("extends", tok, &mut dependencies)?;
                }
                Some(RawToken::Implements) => {
                    let tok = self.bump().map_or(name_tok.span, |t| t.span);
                    self.path_list("implements", tok, &mut dependencies)?;
                }
                Some(RawToken::LBrace) => break,
                _ => {
                    return Err(UnitDefect::ExpectedBody {
                        kind,
                        name,
                        span: name_tok.span,
                    });
                }
            }
        }

        let open = self.bump().map_or(name_tok.span, |t| t.span);
        let init = self.body(kind, &name, open)?;

        Ok(Declaration {
            name,
            kind,
            dependencies,
            init,
            span: name_tok.span,
        })
    }

    fn path_list(
        &mut self,
        keyword: &'static str,
        after: Span,
        out: &mut Vec<String>,
    ) -> Result<(), UnitDefect> {
        let mut after = after;
        loop {
            let path = self.expect_path(keyword, after)?;
            out.push(self.qualify_name(path.text));
            if self.peek() == Some(RawToken::Comma) {
                after = self.bump().map_or(path.span, |t| t.span);
            } else {
                return Ok(());
            }
        }
    }

    /// Brace-match a definition body whose `{` was just consumed.
    fn body(&mut self, kind: DefKind, name: &str, open: Span) -> Result<Option<InitBlock>, UnitDefect> {
        let mut init: Option<InitBlock> = None;
        let mut depth = 1usize;

        while let Some(tok) = self.bump() {
            match tok.kind {
                RawToken::Init if depth == 1 && self.peek() == Some(RawToken::LBrace) => {
                    self.pos += 1;
                    let requires = self.init_block(tok.span)?;
                    match &mut init {
                        Some(block) => block.requires.extend(requires),
                        None => {
                            init = Some(InitBlock {
                                requires,
                                span: tok.span,
                            });
                        }
                    }
                }
                RawToken::LBrace => depth += 1,
                RawToken::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(init);
                    }
                }
                _ => {}
            }
        }

        Err(UnitDefect::UnclosedBody {
            kind,
            name: name.to_owned(),
            span: open,
        })
    }

    /// Collect `require` statements of an `init` block whose `{` was just
    /// consumed.
    fn init_block(&mut self, keyword: Span) -> Result<Vec<String>, UnitDefect> {
        let mut requires = Vec::new();
        let mut depth = 1usize;

        while let Some(tok) = self.bump() {
            match tok.kind {
                RawToken::Require => {
                    let path = self.expect_path("require", tok.span)?;
                    self.expect_semi(|| format!("require {}", path.text), path.span)?;
                    requires.push(self.qualify_name(path.text));
                }
                RawToken::LBrace => depth += 1,
                RawToken::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(requires);
                    }
                }
                _ => {}
            }
        }

        Err(UnitDefect::UnclosedBlock { span: keyword })
    }

    /// Skip a top-level `{ ... }` block whose `{` was just consumed.
    fn skip_block(&mut self, open: Span) -> Result<(), UnitDefect> {
        let mut depth = 1usize;
        while let Some(tok) = self.bump() {
            match tok.kind {
                RawToken::LBrace => depth += 1,
                RawToken::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
        Err(UnitDefect::UnclosedBlock { span: open })
    }
}

#[cfg(test)]
mod tests;
