//! Diagnostics emitted while parsing.
//!
//! The parser never prints. Every failing step hands a [`Diagnostic`] to a
//! [`DiagnosticSink`] before returning its error, and benign conditions
//! (content after the library group) are reported as warnings.

use std::fmt;
use std::panic::Location as CallerLocation;

use crate::syntax::Span;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The parse fails
    Error,
    /// The parse still succeeds
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("ERROR"),
            Severity::Warning => f.write_str("WARNING"),
        }
    }
}

/// Which stage produced the diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Lexer,
    Parser,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Lexer => "DOTLIB_LEX",
            Category::Parser => "DOTLIB_PARSER",
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Location in the parsed input.
    pub span: Span,
    /// Source file and line of the parser step that raised it.
    pub origin: &'static CallerLocation<'static>,
    pub category: Category,
    pub message: String,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[track_caller]
    pub fn error(category: Category, span: Span, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            span,
            origin: CallerLocation::caller(),
            category,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    #[track_caller]
    pub fn warning(category: Category, span: Span, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            span,
            origin: CallerLocation::caller(),
            category,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({}) [{}]: {}",
            self.span,
            self.severity,
            self.category.label(),
            self.message
        )
    }
}

/// Receiver of parser diagnostics.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing` at `error` / `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let origin = format!("{}:{}", diagnostic.origin.file(), diagnostic.origin.line());
        match diagnostic.severity {
            Severity::Error => tracing::error!(
                category = diagnostic.category.label(),
                origin = %origin,
                "{}: {}",
                diagnostic.span,
                diagnostic.message
            ),
            Severity::Warning => tracing::warn!(
                category = diagnostic.category.label(),
                origin = %origin,
                "{}: {}",
                diagnostic.span,
                diagnostic.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Location;

    #[test]
    fn test_display() {
        let span = Span::new(Location::new(3, 5), Location::new(3, 9));
        let diag = Diagnostic::error(Category::Parser, span, "syntax error. ':' is expected.");
        assert_eq!(
            diag.to_string(),
            "line 3, column 5 - 9: (ERROR) [DOTLIB_PARSER]: syntax error. ':' is expected."
        );
    }

    #[test]
    fn test_origin_is_caller() {
        let diag = Diagnostic::warning(Category::Lexer, Span::default(), "w");
        assert!(diag.origin.file().ends_with("diagnostic.rs"));
        assert!(!diag.is_error());
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.emit(Diagnostic::error(Category::Lexer, Span::default(), "a"));
        sink.emit(Diagnostic::warning(Category::Parser, Span::default(), "b"));
        assert_eq!(sink.len(), 2);
        assert!(sink[0].is_error());
    }
}
