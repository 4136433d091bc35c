//! Expression trees.
//!
//! Two small languages appear inside Liberty values:
//! - arithmetic over the supply rails (`vih : VDD * 0.7 ;`), see [`Expr`];
//! - Boolean pin functions (`function : "(A & B)'" ;`), see [`BoolExpr`].

use std::fmt;

use smol_str::SmolStr;

use crate::syntax::Span;

/// One of the three symbolic supply voltages an arithmetic expression may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplyRail {
    Vdd,
    Vss,
    Vcc,
}

impl SupplyRail {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "VDD" => Some(Self::Vdd),
            "VSS" => Some(Self::Vss),
            "VCC" => Some(Self::Vcc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vdd => "VDD",
            Self::Vss => "VSS",
            Self::Vcc => "VCC",
        }
    }
}

/// Arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

/// Arithmetic expression node.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Number(f64),
    Rail(SupplyRail),
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn number(value: f64, span: Span) -> Self {
        Self {
            kind: ExprKind::Number(value),
            span,
        }
    }

    pub fn rail(rail: SupplyRail, span: Span) -> Self {
        Self {
            kind: ExprKind::Rail(rail),
            span,
        }
    }

    /// Negation; `minus` is the span of the `-` sign.
    pub fn neg(operand: Expr, minus: Span) -> Self {
        let span = minus.merge(operand.span);
        Self {
            kind: ExprKind::Neg(Box::new(operand)),
            span,
        }
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        let span = lhs.span.merge(rhs.span);
        Self {
            kind: ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            span,
        }
    }

    /// Compute the expression for the given rail voltages.
    pub fn evaluate(&self, vdd: f64, vss: f64, vcc: f64) -> f64 {
        match &self.kind {
            ExprKind::Number(v) => *v,
            ExprKind::Rail(SupplyRail::Vdd) => vdd,
            ExprKind::Rail(SupplyRail::Vss) => vss,
            ExprKind::Rail(SupplyRail::Vcc) => vcc,
            ExprKind::Neg(e) => -e.evaluate(vdd, vss, vcc),
            ExprKind::Binary { op, lhs, rhs } => {
                let l = lhs.evaluate(vdd, vss, vcc);
                let r = rhs.evaluate(vdd, vss, vcc);
                match op {
                    BinaryOp::Add => l + r,
                    BinaryOp::Sub => l - r,
                    BinaryOp::Mul => l * r,
                    BinaryOp::Div => l / r,
                }
            }
        }
    }

    fn precedence(&self) -> u8 {
        match &self.kind {
            ExprKind::Binary { op, .. } => op.precedence(),
            ExprKind::Neg(_) => 3,
            ExprKind::Number(_) | ExprKind::Rail(_) => 4,
        }
    }
}

fn write_operand<T: fmt::Display>(f: &mut fmt::Formatter<'_>, operand: &T, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(v) => write!(f, "{}", v),
            ExprKind::Rail(rail) => f.write_str(rail.as_str()),
            ExprKind::Neg(operand) => {
                f.write_str("-")?;
                write_operand(f, operand, operand.precedence() < 3)
            }
            ExprKind::Binary { op, lhs, rhs } => {
                let prec = op.precedence();
                write_operand(f, lhs, lhs.precedence() < prec)?;
                write!(f, " {} ", op.symbol())?;
                let rhs_parens = rhs.precedence() < prec
                    || (rhs.precedence() == prec && matches!(op, BinaryOp::Sub | BinaryOp::Div));
                write_operand(f, rhs, rhs_parens)
            }
        }
    }
}

/// Boolean function node.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    pub kind: BoolExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoolExprKind {
    Const(bool),
    /// A pin name
    Var(SmolStr),
    Not(Box<BoolExpr>),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Xor(Box<BoolExpr>, Box<BoolExpr>),
}

impl BoolExpr {
    pub fn constant(value: bool, span: Span) -> Self {
        Self {
            kind: BoolExprKind::Const(value),
            span,
        }
    }

    pub fn var(name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            kind: BoolExprKind::Var(name.into()),
            span,
        }
    }

    /// Negation; `span` covers the operator as well as the operand.
    pub fn not(operand: BoolExpr, span: Span) -> Self {
        let span = span.merge(operand.span);
        Self {
            kind: BoolExprKind::Not(Box::new(operand)),
            span,
        }
    }

    pub fn and(lhs: BoolExpr, rhs: BoolExpr) -> Self {
        let span = lhs.span.merge(rhs.span);
        Self {
            kind: BoolExprKind::And(Box::new(lhs), Box::new(rhs)),
            span,
        }
    }

    pub fn or(lhs: BoolExpr, rhs: BoolExpr) -> Self {
        let span = lhs.span.merge(rhs.span);
        Self {
            kind: BoolExprKind::Or(Box::new(lhs), Box::new(rhs)),
            span,
        }
    }

    pub fn xor(lhs: BoolExpr, rhs: BoolExpr) -> Self {
        let span = lhs.span.merge(rhs.span);
        Self {
            kind: BoolExprKind::Xor(Box::new(lhs), Box::new(rhs)),
            span,
        }
    }

    /// Evaluate with pin values supplied by `pins`. Returns `None` if a
    /// referenced pin has no value.
    pub fn evaluate<F>(&self, pins: &F) -> Option<bool>
    where
        F: Fn(&str) -> Option<bool>,
    {
        Some(match &self.kind {
            BoolExprKind::Const(v) => *v,
            BoolExprKind::Var(name) => pins(name.as_str())?,
            BoolExprKind::Not(e) => !e.evaluate(pins)?,
            BoolExprKind::And(a, b) => a.evaluate(pins)? & b.evaluate(pins)?,
            BoolExprKind::Or(a, b) => a.evaluate(pins)? | b.evaluate(pins)?,
            BoolExprKind::Xor(a, b) => a.evaluate(pins)? ^ b.evaluate(pins)?,
        })
    }

    /// Pin names in order of first appearance.
    pub fn inputs(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_inputs(&mut names);
        names
    }

    fn collect_inputs<'a>(&'a self, names: &mut Vec<&'a str>) {
        match &self.kind {
            BoolExprKind::Const(_) => {}
            BoolExprKind::Var(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
            BoolExprKind::Not(e) => e.collect_inputs(names),
            BoolExprKind::And(a, b) | BoolExprKind::Or(a, b) | BoolExprKind::Xor(a, b) => {
                a.collect_inputs(names);
                b.collect_inputs(names);
            }
        }
    }

    fn precedence(&self) -> u8 {
        match &self.kind {
            BoolExprKind::Or(..) | BoolExprKind::Xor(..) => 1,
            BoolExprKind::And(..) => 2,
            BoolExprKind::Not(_) => 3,
            BoolExprKind::Const(_) | BoolExprKind::Var(_) => 4,
        }
    }
}

impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (op, lhs, rhs) = match &self.kind {
            BoolExprKind::Const(v) => return f.write_str(if *v { "1" } else { "0" }),
            BoolExprKind::Var(name) => return f.write_str(name),
            BoolExprKind::Not(operand) => {
                f.write_str("!")?;
                return write_operand(f, operand, operand.precedence() < 3);
            }
            BoolExprKind::And(a, b) => ("&", a, b),
            BoolExprKind::Or(a, b) => ("|", a, b),
            BoolExprKind::Xor(a, b) => ("^", a, b),
        };
        let prec = self.precedence();
        write_operand(f, lhs, lhs.precedence() < prec)?;
        write!(f, " {} ", op)?;
        write_operand(f, rhs, rhs.precedence() <= prec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn num(v: f64) -> Expr {
        Expr::number(v, Span::default())
    }

    fn var(name: &str) -> BoolExpr {
        BoolExpr::var(name, Span::default())
    }

    #[test]
    fn test_evaluate_rails() {
        let e = Expr::binary(
            BinaryOp::Mul,
            Expr::rail(SupplyRail::Vdd, Span::default()),
            num(0.7),
        );
        assert_relative_eq!(e.evaluate(1.8, 0.0, 3.3), 1.26, epsilon = 1e-12);

        let e = Expr::neg(Expr::rail(SupplyRail::Vcc, Span::default()), Span::default());
        assert_relative_eq!(e.evaluate(1.8, 0.0, 3.3), -3.3);
    }

    #[test]
    fn test_display_minimal_parens() {
        let sum = Expr::binary(BinaryOp::Add, num(2.0), num(3.0));
        let e = Expr::binary(BinaryOp::Mul, sum, num(4.0));
        assert_eq!(e.to_string(), "(2 + 3) * 4");

        let prod = Expr::binary(BinaryOp::Mul, num(3.0), num(4.0));
        let e = Expr::binary(BinaryOp::Add, num(2.0), prod);
        assert_eq!(e.to_string(), "2 + 3 * 4");

        let diff = Expr::binary(BinaryOp::Sub, num(2.0), num(1.0));
        let e = Expr::binary(BinaryOp::Sub, num(5.0), diff);
        assert_eq!(e.to_string(), "5 - (2 - 1)");
    }

    #[test]
    fn test_bool_evaluate() {
        // (A & B) ^ !C
        let e = BoolExpr::xor(
            BoolExpr::and(var("A"), var("B")),
            BoolExpr::not(var("C"), Span::default()),
        );
        let pins = |name: &str| match name {
            "A" => Some(true),
            "B" => Some(true),
            "C" => Some(true),
            _ => None,
        };
        assert_eq!(e.evaluate(&pins), Some(true));
        assert_eq!(e.inputs(), vec!["A", "B", "C"]);

        let missing = BoolExpr::or(var("A"), var("Z"));
        assert_eq!(missing.evaluate(&pins), None);
    }

    #[test]
    fn test_bool_display() {
        let e = BoolExpr::not(BoolExpr::or(var("A"), var("B")), Span::default());
        assert_eq!(e.to_string(), "!(A | B)");

        let e = BoolExpr::or(var("A"), BoolExpr::and(var("B"), var("C")));
        assert_eq!(e.to_string(), "A | B & C");

        let e = BoolExpr::or(var("A"), BoolExpr::xor(var("B"), var("C")));
        assert_eq!(e.to_string(), "A | (B ^ C)");
    }
}
