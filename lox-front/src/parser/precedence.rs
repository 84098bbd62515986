//! Tree rotations that fix operator grouping.
//!
//! Every operator parses its right-hand side with the same unconstrained
//! expression parser, so `a * b / c` first comes out as `a * (b / c)`. The
//! constructors here rebuild such nodes bottom-up until each binary node
//! follows the precedence table with left associativity, and each unary
//! operator applies only to the leftmost operand of a chain.

use tracing::trace;

use crate::ir::ast::{BinaryOperator, Expr, UnaryOperator};

/// Builds `left op right`, rotating while `right` is a binary node that binds
/// no tighter than `op`:
///
/// `(op, l, (op2, l2, r2))` becomes `(op2, (op, l, l2), r2)`, and the new left
/// subtree gets the same treatment.
pub fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    match right {
        Expr::Binary {
            left: inner_left,
            op: inner_op,
            right: inner_right,
        } if op.precedence() >= inner_op.precedence() => {
            trace!(outer = op.symbol(), inner = inner_op.symbol(), "rotating binary");
            Expr::Binary {
                left: Box::new(binary(op, left, *inner_left)),
                op: inner_op,
                right: inner_right,
            }
        }
        right => Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
    }
}

/// Builds `op operand`. Unary binds tighter than any binary operator, so a
/// binary operand is taken apart and the operator is pushed down its left
/// spine: `-(1 * 2)` without parentheses becomes `(-1) * 2`.
pub fn unary(op: UnaryOperator, operand: Expr) -> Expr {
    match operand {
        Expr::Binary {
            left,
            op: inner_op,
            right,
        } => {
            trace!(outer = op.symbol(), inner = inner_op.symbol(), "rotating unary");
            Expr::Binary {
                left: Box::new(unary(op, *left)),
                op: inner_op,
                right,
            }
        }
        operand => Expr::Unary {
            op,
            operand: Box::new(operand),
        },
    }
}
