//! Text renderings of the AST.
//!
//! `Display` on [`Expr`] gives the canonical parenthesized prefix form,
//! `(+ 1.0 (group 2.0))`. [`Source`] renders infix text that parses back into
//! the same tree.

use std::fmt;

use super::ast::{Ast, Expr, Literal};

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => f.write_str(literal.text()),
            Expr::Group(children) => {
                f.write_str("(group")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                f.write_str(")")
            }
            Expr::Unary { op, operand } => write!(f, "({} {operand})", op.symbol()),
            Expr::Binary { left, op, right } => write!(f, "({} {left} {right})", op.symbol()),
        }
    }
}

/// Top-level nodes, one per line.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// Infix source rendering of an expression.
///
/// No parentheses are added beyond the tree's own groups; the parser never
/// builds a shape that needs them.
pub struct Source<'a>(pub &'a Expr);

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Expr::Literal(Literal::String(text)) => write!(f, "\"{text}\""),
            Expr::Literal(literal) => f.write_str(literal.text()),
            Expr::Group(children) => {
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", Source(child))?;
                }
                f.write_str(")")
            }
            Expr::Unary { op, operand } => write!(f, "{}{}", op.symbol(), Source(operand)),
            Expr::Binary { left, op, right } => {
                write!(f, "{} {} {}", Source(left), op.symbol(), Source(right))
            }
        }
    }
}

impl Expr {
    pub fn to_source(&self) -> String {
        Source(self).to_string()
    }
}
