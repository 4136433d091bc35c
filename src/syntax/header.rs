//! Header and element readers.
//!
//! A header is the parenthesized value list after a complex attribute or
//! group name. Each [`HeaderSpec`] fixes how many elements the list holds
//! and which [`ValueReader`] reads each position. Reading goes through a
//! [`HeaderReader`] in three steps: [`HeaderReader::begin`] at `(`,
//! [`HeaderReader::read`] once per element, [`HeaderReader::end`] at `)`.
//! Element-count mismatches are reported by `end` with the span of the
//! whole header.

use crate::ast::enums::{DelayModel, Direction, Technology, TimingSense, TimingType, VarType};
use crate::ast::{Value, ValueNode};
use crate::catalog::AttrKind;
use crate::error::{DotlibError, Result};

use super::parser::Parser;
use super::span::Span;

/// How to read one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueReader {
    Bool,
    Int,
    Float,
    Str,
    /// Whitespace separated names in one string
    StrVector,
    /// Comma separated integers in one string
    IntVector,
    /// Comma separated numbers in one string
    FloatVector,
    Technology,
    DelayModel,
    Direction,
    TimingSense,
    TimingType,
    VarType,
    /// Arithmetic expression up to the statement's `;`
    Expr,
    /// Boolean function in a string
    Function,
}

impl ValueReader {
    /// Read one value for attribute `kind`.
    pub fn read(self, parser: &mut Parser<'_>, kind: AttrKind) -> Result<ValueNode> {
        match self {
            ValueReader::Bool => parser.read_bool(kind),
            ValueReader::Int => parser.read_int(),
            ValueReader::Float => parser.read_float(),
            ValueReader::Str => parser.read_string(),
            ValueReader::StrVector => parser.read_str_vector(),
            ValueReader::IntVector => parser.read_int_vector(),
            ValueReader::FloatVector => parser.read_float_vector(),
            ValueReader::Technology => parser.read_keyword::<Technology>(kind, Value::Technology),
            ValueReader::DelayModel => parser.read_keyword::<DelayModel>(kind, Value::DelayModel),
            ValueReader::Direction => parser.read_keyword::<Direction>(kind, Value::Direction),
            ValueReader::TimingSense => parser.read_keyword::<TimingSense>(kind, Value::TimingSense),
            ValueReader::TimingType => parser.read_keyword::<TimingType>(kind, Value::TimingType),
            ValueReader::VarType => parser.read_keyword::<VarType>(kind, Value::VarType),
            ValueReader::Expr => parser.read_expr_value(),
            ValueReader::Function => parser.read_function(),
        }
    }
}

/// Shape of a header.
#[derive(Debug)]
pub enum HeaderSpec {
    /// Exactly one element per reader, in order
    Fixed(&'static [ValueReader]),
    /// One or more elements, all read the same way
    List(ValueReader),
}

impl HeaderSpec {
    fn reader_at(&self, index: usize) -> Option<ValueReader> {
        match self {
            HeaderSpec::Fixed(readers) => readers.get(index).copied(),
            HeaderSpec::List(reader) => Some(*reader),
        }
    }

    /// Whether `count` elements satisfy this shape.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            HeaderSpec::Fixed(readers) => readers.len() == count,
            HeaderSpec::List(_) => count >= 1,
        }
    }

    /// Description of the expected element count for messages.
    pub fn expected(&self) -> String {
        match self {
            HeaderSpec::Fixed([]) => "no element".to_string(),
            HeaderSpec::Fixed([_]) => "1 element".to_string(),
            HeaderSpec::Fixed(readers) => format!("{} elements", readers.len()),
            HeaderSpec::List(_) => "at least 1 element".to_string(),
        }
    }
}

pub static EMPTY: HeaderSpec = HeaderSpec::Fixed(&[]);
pub static STR: HeaderSpec = HeaderSpec::Fixed(&[ValueReader::Str]);
pub static TECHNOLOGY: HeaderSpec = HeaderSpec::Fixed(&[ValueReader::Technology]);
pub static FLOAT_VECTOR: HeaderSpec = HeaderSpec::Fixed(&[ValueReader::FloatVector]);
pub static INT_VECTOR: HeaderSpec = HeaderSpec::Fixed(&[ValueReader::IntVector]);
pub static STR_STR: HeaderSpec = HeaderSpec::Fixed(&[ValueReader::Str, ValueReader::Str]);
pub static STR_INT: HeaderSpec = HeaderSpec::Fixed(&[ValueReader::Str, ValueReader::Int]);
pub static STR_FLOAT: HeaderSpec = HeaderSpec::Fixed(&[ValueReader::Str, ValueReader::Float]);
pub static FLOAT_FLOAT: HeaderSpec = HeaderSpec::Fixed(&[ValueReader::Float, ValueReader::Float]);
pub static FLOAT_STR: HeaderSpec = HeaderSpec::Fixed(&[ValueReader::Float, ValueReader::Str]);
pub static INT_FLOAT: HeaderSpec = HeaderSpec::Fixed(&[ValueReader::Int, ValueReader::Float]);
pub static STR_STR_STR: HeaderSpec = HeaderSpec::Fixed(&[ValueReader::Str, ValueReader::Str, ValueReader::Str]);
pub static STR_STR_INT: HeaderSpec = HeaderSpec::Fixed(&[ValueReader::Str, ValueReader::Str, ValueReader::Int]);
pub static FLOAT_FLOAT_STR: HeaderSpec =
    HeaderSpec::Fixed(&[ValueReader::Float, ValueReader::Float, ValueReader::Str]);
pub static STR_LIST: HeaderSpec = HeaderSpec::List(ValueReader::Str);
pub static FLOAT_VECTOR_LIST: HeaderSpec = HeaderSpec::List(ValueReader::FloatVector);

/// Reader state for one header.
#[derive(Debug)]
pub struct HeaderReader {
    spec: &'static HeaderSpec,
    open: Span,
    values: Vec<ValueNode>,
}

impl HeaderReader {
    /// Start a header whose `(` is at `open`.
    pub fn begin(spec: &'static HeaderSpec, open: Span) -> Self {
        Self {
            spec,
            open,
            values: Vec::new(),
        }
    }

    /// Read element `index`. Elements past the end of a fixed shape are
    /// consumed and dropped so that `end` can report the full count.
    pub fn read(&mut self, parser: &mut Parser<'_>, kind: AttrKind, index: usize) -> Result<()> {
        match self.spec.reader_at(index) {
            Some(reader) => {
                let value = reader.read(parser, kind)?;
                self.values.push(value);
            }
            None => parser.skip_value()?,
        }
        Ok(())
    }

    /// Finish at the `)` located at `close`, having read `count` elements.
    pub fn end(self, parser: &mut Parser<'_>, close: Span, count: usize) -> Result<ValueNode> {
        let span = self.open.merge(close);
        if !self.spec.accepts(count) {
            return Err(parser.fail(DotlibError::Arity {
                span,
                expected: self.spec.expected(),
                found: count,
            }));
        }
        Ok(ValueNode::new(Value::Complex(self.values), span))
    }
}
