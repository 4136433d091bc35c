//! Parser core: statements, groups and the library root.

use tracing::{debug, trace};

use super::header::{HeaderReader, HeaderSpec, ValueReader};
use super::scanner::{Scanner, Token, TokenKind};
use super::span::Span;
use crate::ast::{Attr, Group, ValueNode};
use crate::catalog::{groups, AttrKind, GroupBuilder, GroupHandler};
use crate::config::ParserConfig;
use crate::diagnostic::{Category, Diagnostic, DiagnosticSink};
use crate::error::{DotlibError, Result};

/// Parser for Liberty text.
///
/// Every failing step reports to the diagnostic sink before returning its
/// error, so callers only need to propagate with `?`.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    /// One token of lookahead
    pushback: Option<Token>,
    config: ParserConfig,
    sink: &'a mut dyn DiagnosticSink,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser over `input`.
    pub fn new(input: &'a str, config: &ParserConfig, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            scanner: Scanner::new(input),
            pushback: None,
            config: config.clone(),
            sink,
            depth: 0,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse the `library` group.
    ///
    /// Blank lines may precede it. Anything other than `library` first is
    /// an error; anything after its closing brace is only a warning.
    pub fn parse(&mut self) -> Result<Group> {
        let tok = loop {
            let tok = self.read_token(false)?;
            if tok.kind != TokenKind::Newline {
                break tok;
            }
        };
        if tok.kind != TokenKind::Symbol || tok.text != AttrKind::Library.name() {
            return Err(self.fail(DotlibError::syntax(
                tok.span,
                "'library' keyword is expected on the top of the structure.",
            )));
        }

        let library = self.parse_group_statement(AttrKind::Library, tok.span, &groups::LIBRARY)?;
        self.warn_trailing_content();
        Ok(library)
    }

    // ============ Statements ============

    /// `':' value ';'`
    pub fn parse_simple_attribute(&mut self, kind: AttrKind, name_span: Span, reader: ValueReader) -> Result<Attr> {
        self.expect(TokenKind::Colon)?;
        let value = reader.read(self, kind)?;
        self.expect_statement_end()?;
        Ok(Attr::simple(kind, name_span, value))
    }

    /// `'(' elem, ... ')' ';'`
    pub fn parse_complex_attribute(
        &mut self,
        kind: AttrKind,
        name_span: Span,
        header: &'static HeaderSpec,
    ) -> Result<Attr> {
        let value = self.parse_header(kind, header)?;
        self.expect_statement_end()?;
        Ok(Attr::complex(kind, name_span, value))
    }

    /// `'(' header ')' '{' statement* '}'`
    pub fn parse_group_statement(
        &mut self,
        kind: AttrKind,
        name_span: Span,
        handler: &'static GroupHandler,
    ) -> Result<Group> {
        if self.depth >= self.config.max_depth {
            return Err(self.fail(DotlibError::syntax(
                name_span,
                format!("groups are nested deeper than {} levels.", self.config.max_depth),
            )));
        }
        self.depth += 1;
        let group = self.read_group(kind, name_span, handler);
        self.depth -= 1;
        group
    }

    fn read_group(&mut self, kind: AttrKind, name_span: Span, handler: &'static GroupHandler) -> Result<Group> {
        let header = self.parse_header(kind, handler.header)?;
        self.expect(TokenKind::LBrace)?;

        let mut body = GroupBuilder::begin(kind, handler);
        loop {
            let tok = self.read_token(false)?;
            match tok.kind {
                TokenKind::Newline => continue,
                TokenKind::RBrace => {
                    let span = name_span.merge(tok.span);
                    if let Err(message) = body.end() {
                        return Err(self.fail(DotlibError::group_check(span, kind.name(), message)));
                    }
                    self.expect_line_end()?;
                    let group = body.finish(name_span, header, span);
                    debug!(
                        group = kind.name(),
                        name = group.name().unwrap_or_default(),
                        attrs = group.attrs.len(),
                        "group committed"
                    );
                    return Ok(group);
                }
                TokenKind::Symbol => {
                    let Some(attr) = AttrKind::from_name(&tok.text) else {
                        return Err(self.fail(DotlibError::UnknownAttribute {
                            span: tok.span,
                            name: tok.text,
                        }));
                    };
                    body.dispatch(self, attr, tok.span)?;
                }
                _ => return Err(self.fail(DotlibError::expected(tok.span, "attribute name"))),
            }
        }
    }

    /// Read a parenthesized header for `kind`.
    pub fn parse_header(&mut self, kind: AttrKind, spec: &'static HeaderSpec) -> Result<ValueNode> {
        let open = self.expect(TokenKind::LParen)?;
        let mut reader = HeaderReader::begin(spec, open.span);

        let mut count = 0;
        let close = if self.at_close_paren() {
            self.read_token(false)?
        } else {
            loop {
                reader.read(self, kind, count)?;
                count += 1;
                let tok = self.read_token(false)?;
                match tok.kind {
                    TokenKind::RParen => break tok,
                    TokenKind::Comma => {}
                    _ => return Err(self.fail(DotlibError::expected(tok.span, "',' or ')'"))),
                }
            }
        };
        reader.end(self, close.span, count)
    }

    // ============ Tokens ============

    /// Next token, from the pushback slot if one is waiting. A lexical
    /// error becomes a [`DotlibError::Lexical`].
    #[track_caller]
    pub fn read_token(&mut self, symbol_mode: bool) -> Result<Token> {
        let tok = match self.pushback.take() {
            Some(tok) => tok,
            None => self.scanner.next_token(symbol_mode),
        };
        if tok.kind == TokenKind::Error {
            return Err(self.fail(DotlibError::lexical(tok.span, tok.text)));
        }
        Ok(tok)
    }

    /// Return `tok` to the input. Only one token can wait at a time.
    #[track_caller]
    pub fn unget_token(&mut self, tok: Token) -> Result<()> {
        if let Some(pending) = self.pushback.as_ref().map(|t| t.kind) {
            return Err(self.fail(DotlibError::syntax(
                tok.span,
                format!("cannot push back {} while {} is pending.", tok.kind, pending),
            )));
        }
        trace!(kind = %tok.kind, "token pushed back");
        self.pushback = Some(tok);
        Ok(())
    }

    /// Read a token that must be of `kind`.
    #[track_caller]
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        let tok = self.read_token(false)?;
        if tok.kind != kind {
            return Err(self.fail(DotlibError::expected(tok.span, kind)));
        }
        Ok(tok)
    }

    /// End of a simple or complex attribute: `;` then end of line. With
    /// `allow_no_semicolon` the `;` may be left out.
    #[track_caller]
    pub fn expect_statement_end(&mut self) -> Result<()> {
        let tok = self.read_token(false)?;
        match tok.kind {
            TokenKind::Semicolon => self.expect_line_end(),
            TokenKind::Newline | TokenKind::End if self.config.allow_no_semicolon => Ok(()),
            _ => Err(self.fail(DotlibError::expected(tok.span, TokenKind::Semicolon))),
        }
    }

    /// A new-line, or the end of the input.
    #[track_caller]
    pub fn expect_line_end(&mut self) -> Result<()> {
        let tok = self.read_token(false)?;
        match tok.kind {
            TokenKind::Newline | TokenKind::End => Ok(()),
            _ => Err(self.fail(DotlibError::expected(tok.span, TokenKind::Newline))),
        }
    }

    /// Report `err` to the sink and hand it back for returning.
    #[track_caller]
    pub fn fail(&mut self, err: DotlibError) -> DotlibError {
        let category = match err {
            DotlibError::Lexical { .. } => Category::Lexer,
            _ => Category::Parser,
        };
        let span = err.span().unwrap_or_default();
        self.sink.emit(Diagnostic::error(category, span, err.to_string()));
        err
    }

    /// Whether the next significant character closes a header.
    fn at_close_paren(&mut self) -> bool {
        match &self.pushback {
            Some(tok) => tok.kind == TokenKind::RParen,
            None => self.scanner.peek_significant() == Some(')'),
        }
    }

    fn warn_trailing_content(&mut self) {
        loop {
            let tok = match self.pushback.take() {
                Some(tok) => tok,
                None => self.scanner.next_token(false),
            };
            match tok.kind {
                TokenKind::Newline => continue,
                TokenKind::End => return,
                _ => {
                    self.sink.emit(Diagnostic::warning(
                        Category::Parser,
                        tok.span,
                        "contents after library group are ignored.",
                    ));
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::AttrValue;
    use crate::diagnostic::Severity;

    fn parse_str(input: &str) -> (Result<Group>, Vec<Diagnostic>) {
        let mut diags: Vec<Diagnostic> = Vec::new();
        let result = Parser::new(input, &ParserConfig::default(), &mut diags).parse();
        (result, diags)
    }

    #[test]
    fn test_minimal_library() {
        let (result, diags) = parse_str("\n\nlibrary(demo) {\n}\n");
        let lib = result.expect("parse failed");
        assert_eq!(lib.kind, AttrKind::Library);
        assert_eq!(lib.name(), Some("demo"));
        assert!(lib.attrs.is_empty());
        assert!(diags.is_empty());
    }

    #[test]
    fn test_library_keyword_required() {
        let (result, diags) = parse_str("cell(x) {\n}\n");
        assert!(matches!(result, Err(DotlibError::Syntax { .. })));
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("'library' keyword is expected"));
    }

    #[test]
    fn test_trailing_content_is_warning() {
        let (result, diags) = parse_str("library(demo) {\n}\n\ncell(x) {\n}\n");
        assert!(result.is_ok());
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert_eq!(diags[0].message, "contents after library group are ignored.");
    }

    #[test]
    fn test_closing_brace_at_end_of_input() {
        let (result, _) = parse_str("library(demo) {\n  area : 1 ;\n}");
        assert!(result.is_err(), "area is not a library attribute");

        let (result, _) = parse_str("library(demo) {\n  nom_voltage : 1.8 ;\n}");
        let lib = result.expect("parse failed");
        assert_eq!(lib.simple(AttrKind::NomVoltage).map(|v| v.float_value()), Some(1.8));
    }

    #[test]
    fn test_simple_attribute_shape() {
        let (result, diags) = parse_str("library(demo) {\n  nom_voltage 1.8 ;\n}\n");
        assert!(result.is_err());
        assert_eq!(diags[0].message, "syntax error. ':' is expected.");
    }

    #[test]
    fn test_unknown_and_unexpected_attributes() {
        let (result, _) = parse_str("library(demo) {\n  frobnicate : 1 ;\n}\n");
        assert!(matches!(result, Err(DotlibError::UnknownAttribute { ref name, .. }) if name == "frobnicate"));

        let (result, _) = parse_str("library(demo) {\n  direction : input ;\n}\n");
        assert!(matches!(
            result,
            Err(DotlibError::UnexpectedAttribute { kind: AttrKind::Direction, group: "library", .. })
        ));
    }

    #[test]
    fn test_group_span_covers_children() {
        let text = "library(demo) {\n  cell(INV) {\n    area : 1.0 ;\n  }\n}\n";
        let (result, _) = parse_str(text);
        let lib = result.expect("parse failed");
        let cell = lib.group(AttrKind::Cell).expect("no cell");
        assert!(lib.span.contains(&cell.span));
        let area = cell.attr(AttrKind::Area).expect("no area");
        assert!(cell.span.contains(&area.span));
        assert!(matches!(area.value, AttrValue::Simple(_)));
    }

    #[test]
    fn test_max_depth() {
        let text = "library(demo) {\n  cell(INV) {\n    pin(A) {\n    }\n  }\n}\n";
        let mut diags: Vec<Diagnostic> = Vec::new();
        let config = ParserConfig::new().with_max_depth(2);
        let result = Parser::new(text, &config, &mut diags).parse();
        assert!(result.is_err());
        assert!(diags[0].message.contains("nested deeper than 2 levels"));
    }

    #[test]
    fn test_double_pushback_rejected() {
        let mut diags: Vec<Diagnostic> = Vec::new();
        let mut parser = Parser::new("a b", &ParserConfig::default(), &mut diags);
        let a = parser.read_token(false).unwrap();
        let b = parser.read_token(false).unwrap();
        parser.unget_token(b).unwrap();
        assert!(parser.unget_token(a).is_err());
        assert_eq!(parser.read_token(false).unwrap().text, "b");
    }

    #[test]
    fn test_lexical_error_category() {
        let (result, diags) = parse_str("library(demo) {\n  comment : \"open\n}\n");
        assert!(matches!(result, Err(DotlibError::Lexical { .. })));
        assert_eq!(diags[0].category, Category::Lexer);
    }
}
