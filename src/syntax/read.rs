//! Primitive value readers.

use std::str::FromStr;

use smol_str::SmolStr;
use thiserror::Error;

use super::parser::Parser;
use super::scanner::{Token, TokenKind};
use crate::ast::enums::Keyword;
use crate::ast::{Value, ValueNode};
use crate::catalog::AttrKind;
use crate::error::{DotlibError, Result};

/// Failure to split a string-encoded number list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberListError {
    #[error("null element in number list.")]
    NullElement,
    #[error("{0}: could not convert to a number.")]
    NotANumber(String),
}

/// Split a comma separated number list such as `"0.1, 0.2, 0.4"`.
///
/// Blanks around elements are ignored and one trailing comma is accepted.
/// An empty element anywhere else is an error; an empty string is an
/// empty list.
pub fn parse_number_list<T: FromStr>(text: &str) -> std::result::Result<Vec<T>, NumberListError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if let [.., before, last] = parts[..] {
        if last.is_empty() && !before.is_empty() {
            parts.pop();
        }
    }
    parts
        .into_iter()
        .map(|part| {
            if part.is_empty() {
                return Err(NumberListError::NullElement);
            }
            part.parse::<T>().map_err(|_| NumberListError::NotANumber(part.to_string()))
        })
        .collect()
}

impl Parser<'_> {
    pub fn read_int(&mut self) -> Result<ValueNode> {
        let tok = self.read_token(false)?;
        if tok.kind != TokenKind::Int {
            return Err(self.fail(DotlibError::expected(tok.span, "integer value")));
        }
        match tok.text.parse::<i64>() {
            Ok(v) => Ok(ValueNode::new(Value::Int(v), tok.span)),
            Err(_) => Err(self.fail(DotlibError::syntax(tok.span, format!("{}: integer out of range.", tok.text)))),
        }
    }

    /// A float; integer literals are accepted too.
    pub fn read_float(&mut self) -> Result<ValueNode> {
        let tok = self.read_token(false)?;
        if !matches!(tok.kind, TokenKind::Float | TokenKind::Int) {
            return Err(self.fail(DotlibError::expected(tok.span, "float value")));
        }
        match tok.text.parse::<f64>() {
            Ok(v) => Ok(ValueNode::new(Value::Float(v), tok.span)),
            Err(_) => Err(self.fail(DotlibError::syntax(tok.span, format!("{}: not a number.", tok.text)))),
        }
    }

    /// A string token, read in symbol mode so that `1ns` or `0.5` stay whole.
    pub fn read_raw_string(&mut self) -> Result<Token> {
        let tok = self.read_token(true)?;
        match tok.kind {
            TokenKind::Symbol | TokenKind::Int | TokenKind::Float => Ok(tok),
            _ => Err(self.fail(DotlibError::expected(tok.span, "string value"))),
        }
    }

    pub fn read_string(&mut self) -> Result<ValueNode> {
        let tok = self.read_raw_string()?;
        Ok(ValueNode::new(Value::Str(SmolStr::from(tok.text)), tok.span))
    }

    /// Whitespace separated names, e.g. `related_bus_pins : "A B C" ;`.
    pub fn read_str_vector(&mut self) -> Result<ValueNode> {
        let tok = self.read_raw_string()?;
        let names = tok.text.split_whitespace().map(SmolStr::from).collect();
        Ok(ValueNode::new(Value::StrVector(names), tok.span))
    }

    /// `true` or `false`, spelled exactly.
    pub fn read_bool(&mut self, kind: AttrKind) -> Result<ValueNode> {
        let tok = self.read_raw_string()?;
        let value = match tok.text.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        };
        let Some(value) = value else {
            return Err(self.fail(DotlibError::illegal_value(
                tok.span,
                kind.name(),
                tok.text,
                "'true' or 'false'",
            )));
        };
        Ok(ValueNode::new(Value::Bool(value), tok.span))
    }

    /// One of the spellings of enumeration `T`, wrapped into a [`Value`].
    pub fn read_keyword<T: Keyword>(&mut self, kind: AttrKind, wrap: fn(T) -> Value) -> Result<ValueNode> {
        let tok = self.read_raw_string()?;
        match T::from_keyword(&tok.text) {
            Some(v) => Ok(ValueNode::new(wrap(v), tok.span)),
            None => Err(self.fail(DotlibError::illegal_value(tok.span, kind.name(), tok.text, T::accepted()))),
        }
    }

    pub fn read_int_vector(&mut self) -> Result<ValueNode> {
        let tok = self.read_raw_string()?;
        match parse_number_list::<i64>(&tok.text) {
            Ok(values) => Ok(ValueNode::new(Value::IntVector(values), tok.span)),
            Err(err) => Err(self.fail(DotlibError::syntax(tok.span, err.to_string()))),
        }
    }

    pub fn read_float_vector(&mut self) -> Result<ValueNode> {
        let tok = self.read_raw_string()?;
        match parse_number_list::<f64>(&tok.text) {
            Ok(values) => Ok(ValueNode::new(Value::FloatVector(values), tok.span)),
            Err(err) => Err(self.fail(DotlibError::syntax(tok.span, err.to_string()))),
        }
    }

    /// Consume a header element without keeping it.
    pub(crate) fn skip_value(&mut self) -> Result<()> {
        let tok = self.read_token(true)?;
        match tok.kind {
            TokenKind::Symbol | TokenKind::Int | TokenKind::Float => Ok(()),
            _ => Err(self.fail(DotlibError::expected(tok.span, "value"))),
        }
    }
}
