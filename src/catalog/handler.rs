//! Group dispatch.
//!
//! A [`GroupHandler`] is a static table describing one kind of group: its
//! header shape, which attributes may appear in its body and how each is
//! read, and an optional check run when the body closes. Supporting a new
//! attribute in a group is one more [`Rule`] in its table.

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use super::kind::AttrKind;
use crate::ast::{Attr, Group, ValueNode};
use crate::error::{DotlibError, Result};
use crate::syntax::{HeaderSpec, Parser, Span, ValueReader};

/// How often an attribute may appear in one group body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    /// At most once; a second occurrence is an error
    Unique,
    /// Any number of times, kept in order
    Repeated,
}

/// Statement shape of an attribute.
#[derive(Debug, Clone, Copy)]
pub enum Syntax {
    /// `name : value ;`
    Simple(ValueReader),
    /// `name ( header ) ;`
    Complex(&'static HeaderSpec),
    /// `name ( header ) { ... }`
    Group(&'static GroupHandler),
}

/// One entry of a group's attribute table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: AttrKind,
    pub occurrence: Occurrence,
    pub syntax: Syntax,
}

impl Rule {
    pub const fn simple(kind: AttrKind, reader: ValueReader) -> Self {
        Self {
            kind,
            occurrence: Occurrence::Unique,
            syntax: Syntax::Simple(reader),
        }
    }

    pub const fn complex(kind: AttrKind, header: &'static HeaderSpec) -> Self {
        Self {
            kind,
            occurrence: Occurrence::Unique,
            syntax: Syntax::Complex(header),
        }
    }

    pub const fn group(kind: AttrKind, handler: &'static GroupHandler) -> Self {
        Self {
            kind,
            occurrence: Occurrence::Unique,
            syntax: Syntax::Group(handler),
        }
    }

    /// Allow the attribute any number of times.
    pub const fn repeated(self) -> Self {
        Self {
            occurrence: Occurrence::Repeated,
            ..self
        }
    }
}

/// Cross-attribute check run when a group body closes.
pub type EndCheck = fn(&GroupBuilder) -> std::result::Result<(), String>;

/// Static description of one kind of group.
pub struct GroupHandler {
    /// Name used in log output
    pub name: &'static str,
    pub header: &'static HeaderSpec,
    pub rules: &'static [Rule],
    pub check: Option<EndCheck>,
}

impl fmt::Debug for GroupHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupHandler")
            .field("name", &self.name)
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl GroupHandler {
    pub fn rule(&self, kind: AttrKind) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.kind == kind)
    }
}

/// Accumulates the body of one group while it is being parsed.
///
/// A fresh builder is created for every group, so nothing carries over
/// between sibling groups of the same kind.
#[derive(Debug)]
pub struct GroupBuilder {
    kind: AttrKind,
    handler: &'static GroupHandler,
    attrs: Vec<Attr>,
    /// Name span of the first occurrence of each unique attribute
    slots: HashMap<AttrKind, Span>,
}

impl GroupBuilder {
    pub fn begin(kind: AttrKind, handler: &'static GroupHandler) -> Self {
        Self {
            kind,
            handler,
            attrs: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Parse the attribute `kind` whose name was read at `span`.
    pub fn dispatch(&mut self, parser: &mut Parser<'_>, kind: AttrKind, span: Span) -> Result<()> {
        let Some(rule) = self.handler.rule(kind).copied() else {
            return Err(parser.fail(DotlibError::UnexpectedAttribute {
                span,
                kind,
                group: self.kind.name(),
            }));
        };
        if rule.occurrence == Occurrence::Unique {
            if let Some(&previous) = self.slots.get(&kind) {
                return Err(parser.fail(DotlibError::DuplicateAttribute { span, kind, previous }));
            }
        }
        trace!(group = self.kind.name(), attr = kind.name(), "dispatch");

        let attr = match rule.syntax {
            Syntax::Simple(reader) => parser.parse_simple_attribute(kind, span, reader)?,
            Syntax::Complex(header) => parser.parse_complex_attribute(kind, span, header)?,
            Syntax::Group(handler) => Attr::group(parser.parse_group_statement(kind, span, handler)?),
        };
        if rule.occurrence == Occurrence::Unique {
            self.slots.insert(kind, span);
        }
        self.attrs.push(attr);
        Ok(())
    }

    /// Run the handler's end check.
    pub fn end(&self) -> std::result::Result<(), String> {
        match self.handler.check {
            Some(check) => check(self),
            None => Ok(()),
        }
    }

    /// Whether `kind` has been read into this group.
    pub fn has(&self, kind: AttrKind) -> bool {
        self.attrs.iter().any(|attr| attr.kind == kind)
    }

    /// Build the group node.
    pub fn finish(self, name_span: Span, header: ValueNode, span: Span) -> Group {
        Group {
            kind: self.kind,
            name_span,
            header,
            attrs: self.attrs,
            span,
        }
    }
}
