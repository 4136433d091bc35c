//! Attribute values.
//!
//! [`Value`] is a closed sum type. Each variant has a strict accessor
//! (`as_int`, `as_float_vector`, ...) returning `Option`, and the scalar and
//! vector variants also have a soft accessor (`int_value`, ...) that yields
//! a neutral default (`0`, `0.0`, `""`, `false`, empty slice) when called on
//! a different variant. Callers that care about the type match on
//! [`Value::kind`] or use the strict form.

use std::fmt;

use smol_str::SmolStr;

use super::enums::{DelayModel, Direction, Technology, TimingSense, TimingType, VarType};
use super::expr::{BoolExpr, Expr};
use crate::syntax::Span;

/// A value with the span of the tokens it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueNode {
    pub value: Value,
    pub span: Span,
}

impl ValueNode {
    pub fn new(value: Value, span: Span) -> Self {
        Self { value, span }
    }
}

impl fmt::Display for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(SmolStr),
    Technology(Technology),
    DelayModel(DelayModel),
    Direction(Direction),
    TimingSense(TimingSense),
    TimingType(TimingType),
    VarType(VarType),
    IntVector(Vec<i64>),
    FloatVector(Vec<f64>),
    StrVector(Vec<SmolStr>),
    Expr(Box<Expr>),
    Function(Box<BoolExpr>),
    /// Elements of a parenthesized header
    Complex(Vec<ValueNode>),
}

/// Discriminant of [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Str,
    Technology,
    DelayModel,
    Direction,
    TimingSense,
    TimingType,
    VarType,
    IntVector,
    FloatVector,
    StrVector,
    Expr,
    Function,
    Complex,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Technology(_) => ValueKind::Technology,
            Value::DelayModel(_) => ValueKind::DelayModel,
            Value::Direction(_) => ValueKind::Direction,
            Value::TimingSense(_) => ValueKind::TimingSense,
            Value::TimingType(_) => ValueKind::TimingType,
            Value::VarType(_) => ValueKind::VarType,
            Value::IntVector(_) => ValueKind::IntVector,
            Value::FloatVector(_) => ValueKind::FloatVector,
            Value::StrVector(_) => ValueKind::StrVector,
            Value::Expr(_) => ValueKind::Expr,
            Value::Function(_) => ValueKind::Function,
            Value::Complex(_) => ValueKind::Complex,
        }
    }

    // ============ Strict accessors ============

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_technology(&self) -> Option<Technology> {
        match self {
            Value::Technology(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_delay_model(&self) -> Option<DelayModel> {
        match self {
            Value::DelayModel(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_direction(&self) -> Option<Direction> {
        match self {
            Value::Direction(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_timing_sense(&self) -> Option<TimingSense> {
        match self {
            Value::TimingSense(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_timing_type(&self) -> Option<TimingType> {
        match self {
            Value::TimingType(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_var_type(&self) -> Option<VarType> {
        match self {
            Value::VarType(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int_vector(&self) -> Option<&[i64]> {
        match self {
            Value::IntVector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float_vector(&self) -> Option<&[f64]> {
        match self {
            Value::FloatVector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str_vector(&self) -> Option<&[SmolStr]> {
        match self {
            Value::StrVector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Value::Expr(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&BoolExpr> {
        match self {
            Value::Function(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&[ValueNode]> {
        match self {
            Value::Complex(v) => Some(v),
            _ => None,
        }
    }

    // ============ Soft accessors ============

    pub fn bool_value(&self) -> bool {
        self.as_bool().unwrap_or_default()
    }

    pub fn int_value(&self) -> i64 {
        self.as_int().unwrap_or_default()
    }

    pub fn float_value(&self) -> f64 {
        self.as_float().unwrap_or_default()
    }

    pub fn string_value(&self) -> &str {
        self.as_str().unwrap_or_default()
    }

    pub fn int_vector_value(&self) -> &[i64] {
        self.as_int_vector().unwrap_or_default()
    }

    pub fn float_vector_value(&self) -> &[f64] {
        self.as_float_vector().unwrap_or_default()
    }

    pub fn str_vector_value(&self) -> &[SmolStr] {
        self.as_str_vector().unwrap_or_default()
    }

    pub fn complex_elems(&self) -> &[ValueNode] {
        self.as_complex().unwrap_or_default()
    }

    /// Element `pos` of a complex value.
    pub fn complex_elem(&self, pos: usize) -> Option<&ValueNode> {
        self.complex_elems().get(pos)
    }
}

/// Whether `s` can be written without quotes.
fn is_plain_symbol(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    /// Liberty text for the value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(s) if is_plain_symbol(s) => f.write_str(s),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Technology(v) => write!(f, "{}", v),
            Value::DelayModel(v) => write!(f, "{}", v),
            Value::Direction(v) => write!(f, "{}", v),
            Value::TimingSense(v) => write!(f, "{}", v),
            Value::TimingType(v) => write!(f, "{}", v),
            Value::VarType(v) => write!(f, "{}", v),
            Value::IntVector(v) => {
                f.write_str("\"")?;
                write_list(f, v, ", ")?;
                f.write_str("\"")
            }
            Value::FloatVector(v) => {
                f.write_str("\"")?;
                write_list(f, v, ", ")?;
                f.write_str("\"")
            }
            Value::StrVector(v) => {
                f.write_str("\"")?;
                write_list(f, v, " ")?;
                f.write_str("\"")
            }
            Value::Expr(e) => write!(f, "{}", e),
            Value::Function(e) => write!(f, "\"{}\"", e),
            Value::Complex(elems) => {
                f.write_str("(")?;
                write_list(f, elems, ", ")?;
                f.write_str(")")
            }
        }
    }
}
