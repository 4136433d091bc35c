//! Arithmetic expression reader.
//!
//! ```text
//! expr    = product { ('+' | '-') product }
//! product = primary { ('*' | '/') primary }
//! primary = NUMBER | 'VDD' | 'VSS' | 'VCC' | '(' expr ')' | '-' primary
//! ```

use super::parser::Parser;
use super::scanner::{Token, TokenKind};
use crate::ast::expr::{BinaryOp, Expr, SupplyRail};
use crate::ast::{Value, ValueNode};
use crate::error::{DotlibError, Result};

impl Parser<'_> {
    /// An expression attribute value, e.g. `vih : 0.7 * VDD ;`.
    pub fn read_expr_value(&mut self) -> Result<ValueNode> {
        let expr = self.read_expr(TokenKind::Semicolon)?;
        let span = expr.span;
        Ok(ValueNode::new(Value::Expr(Box::new(expr)), span))
    }

    /// Read an expression terminated by `end`.
    ///
    /// A `)` terminator is consumed. A `;` terminator (or, with
    /// `allow_no_semicolon`, the end of the line) is left for the statement
    /// reader.
    pub fn read_expr(&mut self, end: TokenKind) -> Result<Expr> {
        let mut lhs = self.read_product()?;
        loop {
            let tok = self.read_token(false)?;
            let op = match tok.kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                TokenKind::Int | TokenKind::Float if tok.text.starts_with('-') => {
                    // `VDD -0.5`: the scanner glued the sign to the literal
                    let first = self.number(&tok, &tok.text[1..])?;
                    let rhs = self.product_tail(first)?;
                    lhs = Expr::binary(BinaryOp::Sub, lhs, rhs);
                    continue;
                }
                kind if kind == end => {
                    if end != TokenKind::RParen {
                        self.unget_token(tok)?;
                    }
                    return Ok(lhs);
                }
                TokenKind::Newline | TokenKind::End
                    if end == TokenKind::Semicolon && self.config().allow_no_semicolon =>
                {
                    self.unget_token(tok)?;
                    return Ok(lhs);
                }
                _ => return Err(self.fail(DotlibError::expected(tok.span, end))),
            };
            let rhs = self.read_product()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn read_product(&mut self) -> Result<Expr> {
        let first = self.read_primary()?;
        self.product_tail(first)
    }

    fn product_tail(&mut self, mut lhs: Expr) -> Result<Expr> {
        loop {
            let tok = self.read_token(false)?;
            let op = match tok.kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => {
                    self.unget_token(tok)?;
                    return Ok(lhs);
                }
            };
            let rhs = self.read_primary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn read_primary(&mut self) -> Result<Expr> {
        let tok = self.read_token(false)?;
        match tok.kind {
            TokenKind::LParen => self.read_expr(TokenKind::RParen),
            TokenKind::Minus => {
                let operand = self.read_primary()?;
                Ok(Expr::neg(operand, tok.span))
            }
            TokenKind::Int | TokenKind::Float => self.number(&tok, &tok.text),
            TokenKind::Symbol => match SupplyRail::from_name(&tok.text) {
                Some(rail) => Ok(Expr::rail(rail, tok.span)),
                None => Err(self.fail(DotlibError::syntax(
                    tok.span,
                    format!("{}: only 'VDD', 'VSS', and 'VCC' are allowed.", tok.text),
                ))),
            },
            _ => Err(self.fail(DotlibError::expected(tok.span, "number"))),
        }
    }

    fn number(&mut self, tok: &Token, text: &str) -> Result<Expr> {
        match text.parse::<f64>() {
            Ok(v) => Ok(Expr::number(v, tok.span)),
            Err(_) => Err(self.fail(DotlibError::syntax(tok.span, format!("{}: not a number.", tok.text)))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::expr::ExprKind;
    use crate::config::ParserConfig;
    use crate::diagnostic::Diagnostic;
    use approx::assert_relative_eq;

    fn read(text: &str) -> Result<Expr> {
        let mut diags: Vec<Diagnostic> = Vec::new();
        let mut parser = Parser::new(text, &ParserConfig::default(), &mut diags);
        let expr = parser.read_expr(TokenKind::Semicolon)?;
        // the terminator is left for the statement reader
        parser.expect(TokenKind::Semicolon)?;
        Ok(expr)
    }

    #[test]
    fn test_precedence() {
        let e = read("2 + 3 * 4 ;").unwrap();
        let ExprKind::Binary { op, lhs, rhs } = &e.kind else {
            panic!("expected a binary node");
        };
        assert_eq!(*op, BinaryOp::Add);
        assert_eq!(lhs.kind, ExprKind::Number(2.0));
        assert!(matches!(rhs.kind, ExprKind::Binary { op: BinaryOp::Mul, .. }));
        assert_relative_eq!(e.evaluate(0.0, 0.0, 0.0), 14.0);
    }

    #[test]
    fn test_parenthesized() {
        let e = read("(2 + 3) * 4 ;").unwrap();
        let ExprKind::Binary { op, lhs, .. } = &e.kind else {
            panic!("expected a binary node");
        };
        assert_eq!(*op, BinaryOp::Mul);
        assert!(matches!(lhs.kind, ExprKind::Binary { op: BinaryOp::Add, .. }));
        assert_relative_eq!(e.evaluate(0.0, 0.0, 0.0), 20.0);
    }

    #[test]
    fn test_rail_left_operand() {
        let e = read("VDD / 2 ;").unwrap();
        let ExprKind::Binary { op, lhs, rhs } = &e.kind else {
            panic!("expected a binary node");
        };
        assert_eq!(*op, BinaryOp::Div);
        assert_eq!(lhs.kind, ExprKind::Rail(SupplyRail::Vdd));
        assert_eq!(rhs.kind, ExprKind::Number(2.0));
    }

    #[test]
    fn test_left_associative() {
        let e = read("10 - 4 - 3 ;").unwrap();
        assert_relative_eq!(e.evaluate(0.0, 0.0, 0.0), 3.0);
        let e = read("8 / 4 / 2 ;").unwrap();
        assert_relative_eq!(e.evaluate(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_glued_minus() {
        let e = read("VDD -0.2 ;").unwrap();
        assert_relative_eq!(e.evaluate(1.0, 0.0, 0.0), 0.8);
        let e = read("-VSS + VCC ;").unwrap();
        assert_relative_eq!(e.evaluate(0.0, 0.5, 3.0), 2.5);
    }

    #[test]
    fn test_only_rails_allowed() {
        assert!(matches!(read("VBB * 2 ;"), Err(DotlibError::Syntax { .. })));
        assert!(read("(1 + 2 ;").is_err());
    }

    #[test]
    fn test_spans_contain_operands() {
        let e = read("0.3 * VDD ;").unwrap();
        let ExprKind::Binary { lhs, rhs, .. } = &e.kind else {
            panic!("expected a binary node");
        };
        assert!(e.span.contains(&lhs.span));
        assert!(e.span.contains(&rhs.span));
    }
}
