//! Attribute and group nodes.

use std::fmt;

use super::value::{Value, ValueNode};
use crate::catalog::AttrKind;
use crate::syntax::Span;

/// One statement inside a group body.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub kind: AttrKind,
    /// Span of the attribute name
    pub name_span: Span,
    pub value: AttrValue,
    /// Span of the whole statement
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// `name : value ;`
    Simple(ValueNode),
    /// `name ( header ) ;`, holding a [`Value::Complex`]
    Complex(ValueNode),
    Group(Group),
}

impl Attr {
    pub fn simple(kind: AttrKind, name_span: Span, value: ValueNode) -> Self {
        let span = name_span.merge(value.span);
        Self {
            kind,
            name_span,
            value: AttrValue::Simple(value),
            span,
        }
    }

    pub fn complex(kind: AttrKind, name_span: Span, value: ValueNode) -> Self {
        let span = name_span.merge(value.span);
        Self {
            kind,
            name_span,
            value: AttrValue::Complex(value),
            span,
        }
    }

    pub fn group(group: Group) -> Self {
        Self {
            kind: group.kind,
            name_span: group.name_span,
            span: group.span,
            value: AttrValue::Group(group),
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match &self.value {
            AttrValue::Group(g) => Some(g),
            _ => None,
        }
    }

    /// The value of a simple or complex attribute.
    pub fn value(&self) -> Option<&ValueNode> {
        match &self.value {
            AttrValue::Simple(v) | AttrValue::Complex(v) => Some(v),
            AttrValue::Group(_) => None,
        }
    }
}

/// A parsed group: keyword, header and body in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub kind: AttrKind,
    pub name_span: Span,
    /// Header elements as a [`Value::Complex`]
    pub header: ValueNode,
    pub attrs: Vec<Attr>,
    /// From the keyword to the closing brace
    pub span: Span,
}

impl Group {
    pub fn keyword(&self) -> &'static str {
        self.kind.name()
    }

    pub fn header_elems(&self) -> &[ValueNode] {
        self.header.value.complex_elems()
    }

    /// First header element as a string, e.g. the cell name.
    pub fn name(&self) -> Option<&str> {
        self.header_elems().first().and_then(|v| v.value.as_str())
    }

    /// First attribute of `kind`.
    pub fn attr(&self, kind: AttrKind) -> Option<&Attr> {
        self.attrs.iter().find(|a| a.kind == kind)
    }

    /// All attributes of `kind`, in source order.
    pub fn attrs_of(&self, kind: AttrKind) -> impl Iterator<Item = &Attr> + '_ {
        self.attrs.iter().filter(move |a| a.kind == kind)
    }

    /// All nested groups of `kind`, in source order.
    pub fn groups_of(&self, kind: AttrKind) -> impl Iterator<Item = &Group> + '_ {
        self.attrs_of(kind).filter_map(Attr::as_group)
    }

    pub fn group(&self, kind: AttrKind) -> Option<&Group> {
        self.groups_of(kind).next()
    }

    /// Nested group of `kind` whose name is `name`.
    pub fn find_group(&self, kind: AttrKind, name: &str) -> Option<&Group> {
        self.groups_of(kind).find(|g| g.name() == Some(name))
    }

    /// Value of the simple attribute `kind`.
    pub fn simple(&self, kind: AttrKind) -> Option<&Value> {
        self.attrs_of(kind).find_map(|a| match &a.value {
            AttrValue::Simple(v) => Some(&v.value),
            _ => None,
        })
    }

    /// Elements of the complex attribute `kind`.
    pub fn complex(&self, kind: AttrKind) -> Option<&[ValueNode]> {
        self.attrs_of(kind).find_map(|a| match &a.value {
            AttrValue::Complex(v) => Some(v.value.complex_elems()),
            _ => None,
        })
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        let pad = "  ".repeat(level);
        writeln!(f, "{}{} {} {{", pad, self.keyword(), self.header)?;
        for attr in &self.attrs {
            match &attr.value {
                AttrValue::Simple(v) => writeln!(f, "{}  {} : {} ;", pad, attr.kind, v)?,
                AttrValue::Complex(v) => writeln!(f, "{}  {} {} ;", pad, attr.kind, v)?,
                AttrValue::Group(g) => g.write_indented(f, level + 1)?,
            }
        }
        writeln!(f, "{}}}", pad)
    }
}

impl fmt::Display for Group {
    /// Liberty text for the group, two spaces per nesting level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
