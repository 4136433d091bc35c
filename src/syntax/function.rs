//! Boolean function reader.
//!
//! Pin functions are carried in strings, e.g. `function : "(A & B)'" ;`.
//! The string content is scanned and parsed on its own; spans are mapped
//! back to the position of the content in the file.
//!
//! ```text
//! expr    = product { ('|' | '+' | '^') product }
//! product = factor { ['&' | '*'] factor }      (juxtaposition is AND)
//! factor  = '!' factor | primary { '\'' }
//! primary = NAME | '0' | '1' | '(' expr ')'
//! ```

use std::iter::Peekable;
use std::str::Chars;

use super::parser::Parser;
use super::span::{Location, Span};
use crate::ast::expr::BoolExpr;
use crate::ast::{Value, ValueNode};
use crate::error::{DotlibError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FuncTokenKind {
    Name,
    Const(bool),
    Not,
    Prime,
    And,
    Or,
    Xor,
    LParen,
    RParen,
    End,
}

impl FuncTokenKind {
    fn describe(self) -> &'static str {
        match self {
            FuncTokenKind::Name => "pin name",
            FuncTokenKind::Const(_) => "constant",
            FuncTokenKind::Not => "'!'",
            FuncTokenKind::Prime => "'''",
            FuncTokenKind::And => "'&'",
            FuncTokenKind::Or => "'|'",
            FuncTokenKind::Xor => "'^'",
            FuncTokenKind::LParen => "'('",
            FuncTokenKind::RParen => "')'",
            FuncTokenKind::End => "end of expression",
        }
    }
}

#[derive(Debug, Clone)]
struct FuncToken {
    kind: FuncTokenKind,
    text: String,
    span: Span,
}

struct FuncScanner<'a> {
    chars: Peekable<Chars<'a>>,
    line: u32,
    column: u32,
    /// Location of the most recently consumed character
    last: Location,
    /// Byte offset of the next character
    offset: usize,
    /// Remaining line continuations, see [`Token::continuations`]
    ///
    /// [`Token::continuations`]: super::scanner::Token::continuations
    continuations: &'a [(usize, Location)],
}

impl<'a> FuncScanner<'a> {
    fn new(text: &'a str, base: Location, continuations: &'a [(usize, Location)]) -> Self {
        let mut scanner = Self {
            chars: text.chars().peekable(),
            line: base.line,
            column: base.column,
            last: base,
            offset: 0,
            continuations,
        };
        scanner.resume_after_continuation();
        scanner
    }

    fn here(&self) -> Location {
        Location::new(self.line, self.column)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.last = self.here();
        self.offset += c.len_utf8();
        self.column += 1;
        self.resume_after_continuation();
        Some(c)
    }

    fn resume_after_continuation(&mut self) {
        if let Some((&(offset, resume), rest)) = self.continuations.split_first() {
            if offset == self.offset {
                self.line = resume.line;
                self.column = resume.column;
                self.continuations = rest;
            }
        }
    }

    fn next_token(&mut self) -> Result<FuncToken> {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.bump();
        }
        let start = self.here();
        let Some(c) = self.bump() else {
            return Ok(FuncToken {
                kind: FuncTokenKind::End,
                text: String::new(),
                span: Span::point(start),
            });
        };
        let mut text = String::from(c);
        let kind = match c {
            '!' => FuncTokenKind::Not,
            '\'' => FuncTokenKind::Prime,
            '&' | '*' => FuncTokenKind::And,
            '|' | '+' => FuncTokenKind::Or,
            '^' => FuncTokenKind::Xor,
            '(' => FuncTokenKind::LParen,
            ')' => FuncTokenKind::RParen,
            c if c.is_ascii_digit() => {
                while let Some(d) = self.chars.peek().copied().filter(char::is_ascii_digit) {
                    text.push(d);
                    self.bump();
                }
                match text.as_str() {
                    "0" => FuncTokenKind::Const(false),
                    "1" => FuncTokenKind::Const(true),
                    _ => {
                        let span = Span::new(start, self.last);
                        return Err(DotlibError::syntax(span, format!("{}: 0 or 1 is expected.", text)));
                    }
                }
            }
            c if c.is_alphabetic() || c == '_' => {
                while let Some(n) = self.chars.peek().copied().filter(|&n| is_name_char(n)) {
                    text.push(n);
                    self.bump();
                }
                FuncTokenKind::Name
            }
            c => {
                return Err(DotlibError::lexical(
                    Span::point(start),
                    format!("unexpected character '{}' in function.", c),
                ));
            }
        };
        let end = self.last;
        Ok(FuncToken {
            kind,
            text,
            span: Span::new(start, end),
        })
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '[' | ']')
}

struct FuncParser<'a> {
    scanner: FuncScanner<'a>,
    pushback: Option<FuncToken>,
}

impl<'a> FuncParser<'a> {
    fn read_token(&mut self) -> Result<FuncToken> {
        match self.pushback.take() {
            Some(tok) => Ok(tok),
            None => self.scanner.next_token(),
        }
    }

    fn unget_token(&mut self, tok: FuncToken) -> Result<()> {
        if self.pushback.is_some() {
            return Err(DotlibError::syntax(tok.span, "cannot push back two tokens."));
        }
        self.pushback = Some(tok);
        Ok(())
    }

    fn read_expr(&mut self, end: FuncTokenKind) -> Result<BoolExpr> {
        let mut lhs = self.read_product()?;
        loop {
            let tok = self.read_token()?;
            lhs = match tok.kind {
                FuncTokenKind::Or => BoolExpr::or(lhs, self.read_product()?),
                FuncTokenKind::Xor => BoolExpr::xor(lhs, self.read_product()?),
                kind if kind == end => return Ok(lhs),
                _ => return Err(DotlibError::expected(tok.span, end.describe())),
            };
        }
    }

    fn read_product(&mut self) -> Result<BoolExpr> {
        let mut lhs = self.read_factor()?;
        loop {
            let tok = self.read_token()?;
            match tok.kind {
                FuncTokenKind::And => {}
                FuncTokenKind::Not | FuncTokenKind::LParen | FuncTokenKind::Name => self.unget_token(tok)?,
                _ => {
                    self.unget_token(tok)?;
                    return Ok(lhs);
                }
            }
            let rhs = self.read_factor()?;
            lhs = BoolExpr::and(lhs, rhs);
        }
    }

    fn read_factor(&mut self) -> Result<BoolExpr> {
        let tok = self.read_token()?;
        if tok.kind == FuncTokenKind::Not {
            let operand = self.read_factor()?;
            return Ok(BoolExpr::not(operand, tok.span));
        }
        self.unget_token(tok)?;

        let mut expr = self.read_primary()?;
        loop {
            let tok = self.read_token()?;
            if tok.kind != FuncTokenKind::Prime {
                self.unget_token(tok)?;
                return Ok(expr);
            }
            expr = BoolExpr::not(expr, tok.span);
        }
    }

    fn read_primary(&mut self) -> Result<BoolExpr> {
        let tok = self.read_token()?;
        match tok.kind {
            FuncTokenKind::LParen => self.read_expr(FuncTokenKind::RParen),
            FuncTokenKind::Name => Ok(BoolExpr::var(tok.text, tok.span)),
            FuncTokenKind::Const(v) => Ok(BoolExpr::constant(v, tok.span)),
            _ => Err(DotlibError::expected(tok.span, "pin name or constant")),
        }
    }
}

/// Parse the content of a function string whose first character is at `base`.
pub fn parse_function(text: &str, base: Location) -> Result<BoolExpr> {
    parse_continued_function(text, base, &[])
}

fn parse_continued_function(text: &str, base: Location, continuations: &[(usize, Location)]) -> Result<BoolExpr> {
    let mut parser = FuncParser {
        scanner: FuncScanner::new(text, base, continuations),
        pushback: None,
    };
    parser.read_expr(FuncTokenKind::End)
}

impl Parser<'_> {
    /// A Boolean function attribute value.
    pub fn read_function(&mut self) -> Result<ValueNode> {
        let tok = self.read_raw_string()?;
        let base = if tok.quoted {
            Location::new(tok.span.start.line, tok.span.start.column + 1)
        } else {
            tok.span.start
        };
        match parse_continued_function(&tok.text, base, &tok.continuations) {
            Ok(expr) => Ok(ValueNode::new(Value::Function(Box::new(expr)), tok.span)),
            Err(err) => Err(self.fail(err)),
        }
    }
}
