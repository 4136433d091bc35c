//! Error types for the Liberty parser.
//!
//! This module provides a unified error type [`DotlibError`] covering
//! everything that can stop a parse: lexical errors, statement-shape
//! errors, header arity mismatches, illegal enumeration values and the
//! group-level checks.

use thiserror::Error;

use crate::catalog::AttrKind;
use crate::syntax::Span;

/// Result type alias using [`DotlibError`].
pub type Result<T> = std::result::Result<T, DotlibError>;

/// Unified error type for all parse operations.
#[derive(Error, Debug)]
pub enum DotlibError {
    // ============ Token Errors ============
    /// The scanner could not classify the input
    #[error("{message}")]
    Lexical { span: Span, message: String },

    /// Wrong token kind for the statement being read
    #[error("syntax error. {message}")]
    Syntax { span: Span, message: String },

    // ============ Value Errors ============
    /// Header element count does not match the reader's contract
    #[error("syntax error. {expected} expected, {found} given")]
    Arity {
        span: Span,
        expected: String,
        found: usize,
    },

    /// A string that is not one of the accepted spellings
    #[error("{text}: illegal value for '{attr}'. {accepted} expected")]
    IllegalValue {
        span: Span,
        attr: &'static str,
        text: String,
        accepted: String,
    },

    // ============ Group Errors ============
    /// A single-valued attribute given twice in one group
    #[error("'{kind}' appears more than once. previously appears at {previous}")]
    DuplicateAttribute {
        span: Span,
        kind: AttrKind,
        previous: Span,
    },

    /// A name that is not a Liberty attribute at all
    #[error("{name}: unknown attribute")]
    UnknownAttribute { span: Span, name: String },

    /// A known attribute that does not belong in the enclosing group
    #[error("'{kind}' is not allowed in '{group}' group")]
    UnexpectedAttribute {
        span: Span,
        kind: AttrKind,
        group: &'static str,
    },

    /// A required-field or consistency check failed when a group closed
    #[error("{group}: {message}")]
    GroupCheck {
        span: Span,
        group: &'static str,
        message: String,
    },

    // ============ I/O Errors ============
    /// Error reading a library file
    #[error("Failed to read library file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DotlibError {
    /// Create a lexical error
    pub fn lexical(span: Span, message: impl Into<String>) -> Self {
        Self::Lexical {
            span,
            message: message.into(),
        }
    }

    /// Create a syntax error
    pub fn syntax(span: Span, message: impl Into<String>) -> Self {
        Self::Syntax {
            span,
            message: message.into(),
        }
    }

    /// Create a syntax error for a missing token
    pub fn expected(span: Span, what: impl std::fmt::Display) -> Self {
        Self::syntax(span, format!("{} is expected.", what))
    }

    /// Create an illegal-value error
    pub fn illegal_value(span: Span, attr: &'static str, text: impl Into<String>, accepted: impl Into<String>) -> Self {
        Self::IllegalValue {
            span,
            attr,
            text: text.into(),
            accepted: accepted.into(),
        }
    }

    /// Create a group check error
    pub fn group_check(span: Span, group: &'static str, message: impl Into<String>) -> Self {
        Self::GroupCheck {
            span,
            group,
            message: message.into(),
        }
    }

    /// Location of the offending input, if the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Lexical { span, .. }
            | Self::Syntax { span, .. }
            | Self::Arity { span, .. }
            | Self::IllegalValue { span, .. }
            | Self::DuplicateAttribute { span, .. }
            | Self::UnknownAttribute { span, .. }
            | Self::UnexpectedAttribute { span, .. }
            | Self::GroupCheck { span, .. } => Some(*span),
            Self::FileReadError { .. } => None,
        }
    }

    /// Whether a group body held a name it does not accept, either because
    /// the name is not a Liberty attribute or because it belongs elsewhere.
    pub fn is_unknown_attribute(&self) -> bool {
        matches!(self, Self::UnknownAttribute { .. } | Self::UnexpectedAttribute { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Location;

    #[test]
    fn test_messages() {
        let span = Span::new(Location::new(2, 3), Location::new(2, 7));

        let err = DotlibError::expected(span, "':'");
        assert_eq!(err.to_string(), "syntax error. ':' is expected.");

        let err = DotlibError::DuplicateAttribute {
            span,
            kind: AttrKind::Area,
            previous: Span::point(Location::new(1, 3)),
        };
        assert_eq!(
            err.to_string(),
            "'area' appears more than once. previously appears at line 1, column 3"
        );

        let err = DotlibError::illegal_value(span, "technology", "nmos", "'cmos' or 'fpga'");
        assert_eq!(err.to_string(), "nmos: illegal value for 'technology'. 'cmos' or 'fpga' expected");
        assert_eq!(err.span(), Some(span));
    }
}
