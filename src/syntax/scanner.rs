//! Scanner (tokenizer) for Liberty source text.
//!
//! The scanner never fails: characters it cannot classify produce a token
//! of kind [`TokenKind::Error`] whose text is the message. The parser turns
//! that into a lexical error at the call site.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use super::span::{Location, Span};

/// A token produced by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The lexeme. Quoted strings carry their content without the quotes,
    /// error tokens carry the message.
    pub text: String,
    /// Location of the token in the input
    pub span: Span,
    /// True for a `"..."` string
    pub quoted: bool,
    /// Line continuations inside a quoted string: the byte offset into
    /// `text` and the file location of the character that follows.
    pub continuations: Vec<(usize, Location)>,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            quoted: false,
            continuations: Vec::new(),
        }
    }
}

/// Token types of the Liberty grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Colon,
    Semicolon,
    Comma,
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
    LBrace,
    RBrace,
    /// Identifier or quoted string
    Symbol,
    Int,
    Float,
    Newline,
    End,
    Error,
}

impl TokenKind {
    /// Human-readable name used in "X is expected" messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::Comma => "','",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Symbol => "string",
            TokenKind::Int => "integer",
            TokenKind::Float => "number",
            TokenKind::Newline => "new-line",
            TokenKind::End => "end-of-file",
            TokenKind::Error => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Scanner over Liberty source text.
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    line: u32,
    column: u32,
    /// Location of the most recently consumed character
    last: Location,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
            last: Location::default(),
        }
    }

    /// Get the next token.
    ///
    /// With `symbol_mode` set, digits and `.` are symbol characters, so a
    /// lexeme such as `0.5` or `1ns` comes back as one `Symbol`.
    pub fn next_token(&mut self, symbol_mode: bool) -> Token {
        loop {
            let start = self.here();
            let Some(ch) = self.bump() else {
                return Token::new(TokenKind::End, "", Span::point(start));
            };

            let kind = match ch {
                ' ' | '\t' | '\r' => continue,
                '\\' => {
                    if self.peek() == Some('\r') {
                        self.bump();
                    }
                    if self.peek() == Some('\n') {
                        self.bump();
                        continue;
                    }
                    return self.error(start, "'\\' must be followed by a new-line");
                }
                '\n' => TokenKind::Newline,
                ':' => TokenKind::Colon,
                ';' => TokenKind::Semicolon,
                ',' => TokenKind::Comma,
                '+' => TokenKind::Plus,
                '*' => TokenKind::Star,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                '/' => match self.peek() {
                    Some('/') => {
                        self.skip_line_comment();
                        continue;
                    }
                    Some('*') => {
                        self.bump();
                        if !self.skip_block_comment() {
                            return self.error(start, "unexpected end-of-file in comment block");
                        }
                        continue;
                    }
                    _ => TokenKind::Slash,
                },
                '"' => return self.read_quoted(start),
                '-' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                    return self.read_number(start, ch);
                }
                '-' => TokenKind::Minus,
                c if is_symbol_start(c, symbol_mode) => return self.read_symbol(start, c, symbol_mode),
                c if c.is_ascii_digit() || c == '.' => return self.read_number(start, c),
                c => return self.error(start, format!("unexpected character '{}'", c)),
            };

            return Token::new(kind, ch.to_string(), Span::new(start, self.last));
        }
    }

    /// Look at the next character that is not a blank, a comment or a line
    /// continuation, without consuming anything.
    ///
    /// Returns `None` at the end of input and inside an unterminated block
    /// comment; `next_token` reports the latter.
    pub fn peek_significant(&self) -> Option<char> {
        let mut rest = self.chars.clone();
        loop {
            let ch = rest.next()?;
            match ch {
                ' ' | '\t' | '\r' => {}
                '\\' => {
                    if rest.peek() == Some(&'\r') {
                        rest.next();
                    }
                    if rest.next_if_eq(&'\n').is_none() {
                        return Some(ch);
                    }
                }
                '/' => match rest.peek().copied() {
                    Some('/') => {
                        while rest.next_if(|&c| c != '\n').is_some() {}
                    }
                    Some('*') => {
                        rest.next();
                        let mut prev = '\0';
                        loop {
                            let c = rest.next()?;
                            if prev == '*' && c == '/' {
                                break;
                            }
                            prev = c;
                        }
                    }
                    _ => return Some(ch),
                },
                _ => return Some(ch),
            }
        }
    }

    fn here(&self) -> Location {
        Location::new(self.line, self.column)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.last = self.here();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn error(&self, start: Location, message: impl Into<String>) -> Token {
        Token::new(TokenKind::Error, message, Span::new(start, self.last.max(start)))
    }

    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.bump();
        }
    }

    /// Returns false when the input ends inside the comment.
    fn skip_block_comment(&mut self) -> bool {
        let mut prev = '\0';
        while let Some(c) = self.bump() {
            if prev == '*' && c == '/' {
                return true;
            }
            prev = c;
        }
        false
    }

    fn read_quoted(&mut self, start: Location) -> Token {
        let mut text = String::new();
        let mut continuations: Vec<(usize, Location)> = Vec::new();
        loop {
            match self.bump() {
                None => return self.error(start, "unexpected end-of-file in quoted string"),
                Some('"') => break,
                Some('\n') => return self.error(start, "unexpected new-line in quoted string"),
                Some('\\') => {
                    if self.peek() == Some('\r') {
                        self.bump();
                    }
                    if self.peek() == Some('\n') {
                        self.bump();
                        let resume = (text.len(), self.here());
                        match continuations.last_mut() {
                            Some(prev) if prev.0 == resume.0 => *prev = resume,
                            _ => continuations.push(resume),
                        }
                    } else {
                        text.push('\\');
                    }
                }
                Some(c) => text.push(c),
            }
        }
        Token {
            kind: TokenKind::Symbol,
            text,
            span: Span::new(start, self.last),
            quoted: true,
            continuations,
        }
    }

    fn read_symbol(&mut self, start: Location, first: char, symbol_mode: bool) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.peek() {
            if is_symbol_char(c, symbol_mode) {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        Token::new(TokenKind::Symbol, text, Span::new(start, self.last))
    }

    /// `first` is a digit, `.` or a `-` already known to precede a digit.
    fn read_number(&mut self, start: Location, first: char) -> Token {
        let mut text = String::from(first);
        let mut is_float = false;

        if first == '.' {
            is_float = true;
            if !self.take_digits(&mut text) {
                return self.error(start, "digit is expected after '.'");
            }
        } else {
            self.take_digits(&mut text);
            if self.peek() == Some('.') {
                self.bump();
                text.push('.');
                is_float = true;
                if !self.take_digits(&mut text) {
                    return self.error(start, "digit is expected after '.'");
                }
            }
        }

        if let Some(e @ ('e' | 'E')) = self.peek() {
            self.bump();
            text.push(e);
            is_float = true;
            if let Some(sign @ ('+' | '-')) = self.peek() {
                self.bump();
                text.push(sign);
            }
            if !self.take_digits(&mut text) {
                return self.error(start, "exponent value is expected");
            }
        }

        if self.peek().is_some_and(|c| is_symbol_char(c, true)) {
            while let Some(c) = self.peek().filter(|&c| is_symbol_char(c, true)) {
                text.push(c);
                self.bump();
            }
            return self.error(start, format!("{}: not a number", text));
        }

        let kind = if is_float { TokenKind::Float } else { TokenKind::Int };
        Token::new(kind, text, Span::new(start, self.last))
    }

    /// Returns true if at least one digit was consumed.
    fn take_digits(&mut self, text: &mut String) -> bool {
        let mut any = false;
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            text.push(c);
            self.bump();
            any = true;
        }
        any
    }
}

fn is_symbol_start(c: char, symbol_mode: bool) -> bool {
    c.is_alphabetic() || c == '_' || (symbol_mode && (c.is_ascii_digit() || c == '.'))
}

fn is_symbol_char(c: char, symbol_mode: bool) -> bool {
    c.is_alphanumeric() || c == '_' || (symbol_mode && c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kinds(input: &str, symbol_mode: bool) -> Vec<TokenKind> {
        let mut scanner = Scanner::new(input);
        let mut out = Vec::new();
        loop {
            let tok = scanner.next_token(symbol_mode);
            let kind = tok.kind;
            out.push(kind);
            if matches!(kind, TokenKind::End | TokenKind::Error) {
                return out;
            }
        }
    }

    fn first(input: &str, symbol_mode: bool) -> Token {
        Scanner::new(input).next_token(symbol_mode)
    }

    #[test]
    fn test_punctuation() {
        use TokenKind::*;
        assert_eq!(
            kinds(":;,+-*/(){}\n", false),
            vec![Colon, Semicolon, Comma, Plus, Minus, Star, Slash, LParen, RParen, LBrace, RBrace, Newline, End]
        );
    }

    #[test]
    fn test_numbers() {
        let tok = first("123", false);
        assert_eq!((tok.kind, tok.text.as_str()), (TokenKind::Int, "123"));

        let tok = first("-42", false);
        assert_eq!((tok.kind, tok.text.as_str()), (TokenKind::Int, "-42"));

        let tok = first("0.125", false);
        assert_eq!((tok.kind, tok.text.as_str()), (TokenKind::Float, "0.125"));

        let tok = first(".5", false);
        assert_eq!((tok.kind, tok.text.as_str()), (TokenKind::Float, ".5"));

        let tok = first("1.5e-3", false);
        assert_eq!((tok.kind, tok.text.as_str()), (TokenKind::Float, "1.5e-3"));

        let tok = first("2E10", false);
        assert_eq!((tok.kind, tok.text.as_str()), (TokenKind::Float, "2E10"));
    }

    #[test]
    fn test_malformed_numbers() {
        assert_eq!(first("1.", false).kind, TokenKind::Error);
        assert_eq!(first("1.0e", false).kind, TokenKind::Error);

        let tok = first("1.0ns", false);
        assert_eq!(tok.kind, TokenKind::Error);
        assert_eq!(tok.text, "1.0ns: not a number");
    }

    #[test]
    fn test_symbol_mode() {
        let tok = first("1.0ns", true);
        assert_eq!((tok.kind, tok.text.as_str()), (TokenKind::Symbol, "1.0ns"));

        let tok = first("0.5", true);
        assert_eq!((tok.kind, tok.text.as_str()), (TokenKind::Symbol, "0.5"));

        // '.' ends an identifier outside symbol mode
        let mut scanner = Scanner::new("a.b");
        assert_eq!(scanner.next_token(false).text, "a");
        assert_eq!(scanner.next_token(false).kind, TokenKind::Error);
    }

    #[test]
    fn test_quoted_string() {
        let tok = first("\"1, 2, 3\"", false);
        assert_eq!(tok.kind, TokenKind::Symbol);
        assert_eq!(tok.text, "1, 2, 3");
        assert!(tok.quoted);
        assert_eq!(tok.span.start, Location::new(1, 1));
        assert_eq!(tok.span.end, Location::new(1, 9));

        let tok = first("\"0.1, \\\n0.2\"", false);
        assert_eq!(tok.text, "0.1, 0.2");
        assert_eq!(tok.continuations, vec![(5, Location::new(2, 1))]);

        assert_eq!(first("\"abc\ndef\"", false).kind, TokenKind::Error);
        assert_eq!(first("\"abc", false).kind, TokenKind::Error);
    }

    #[test]
    fn test_comments() {
        use TokenKind::*;
        assert_eq!(kinds("a /* x\ny */ b // tail\nc", false), vec![Symbol, Symbol, Newline, Symbol, End]);
        assert_eq!(kinds("a /* never closed", false), vec![Symbol, Error]);
    }

    #[test]
    fn test_line_continuation() {
        use TokenKind::*;
        assert_eq!(kinds("a \\\n b", false), vec![Symbol, Symbol, End]);
        assert_eq!(kinds("a \\ b", false), vec![Symbol, Error]);
    }

    #[test]
    fn test_spans() {
        let mut scanner = Scanner::new("  area : 1.5 ;\n}");
        let area = scanner.next_token(false);
        assert_eq!(area.span, Span::new(Location::new(1, 3), Location::new(1, 6)));
        let colon = scanner.next_token(false);
        assert_eq!(colon.span, Span::point(Location::new(1, 8)));
        let value = scanner.next_token(false);
        assert_eq!(value.span, Span::new(Location::new(1, 10), Location::new(1, 12)));
        scanner.next_token(false);
        let nl = scanner.next_token(false);
        assert_eq!(nl.kind, TokenKind::Newline);
        let rcb = scanner.next_token(false);
        assert_eq!(rcb.span.start, Location::new(2, 1));
    }

    #[rstest]
    #[case("  \t)")]
    #[case(" /* none */ )")]
    #[case("/* a */ /* b */)")]
    #[case(" \\\n  )")]
    fn test_peek_significant_skips_filler(#[case] input: &str) {
        let mut scanner = Scanner::new(input);
        assert_eq!(scanner.peek_significant(), Some(')'));
        assert_eq!(scanner.next_token(false).kind, TokenKind::RParen);
    }

    #[test]
    fn test_peek_significant_stops() {
        assert_eq!(Scanner::new(" // x\n)").peek_significant(), Some('\n'));
        assert_eq!(Scanner::new(" / 2").peek_significant(), Some('/'));
        assert_eq!(Scanner::new(" \\x").peek_significant(), Some('\\'));
        assert_eq!(Scanner::new(" /* open").peek_significant(), None);
    }

    #[test]
    fn test_unexpected_character() {
        let tok = first("@", false);
        assert_eq!(tok.kind, TokenKind::Error);
        assert_eq!(tok.text, "unexpected character '@'");
    }
}
