use crate::ast::Ast;
use crate::op::BinOp;
use std::fmt;

/// Whether `child` must keep parentheses when printed as an operand of a
/// node with operator `op`, so that the text re-reads into the same tree.
///
/// Literals never need them. A lower-precedence binary child always does.
/// At equal precedence only the right operand of `-` or `/` is wrapped:
/// `a - (b - c)` must not flatten into `a - b - c`, which regroups to the
/// left and changes the value, while the left side of the same chain prints
/// flat. Unrecognized operators have no precedence and stay bare on both
/// sides.
pub(crate) fn needs_parens(op: &BinOp, child: &Ast, right_side: bool) -> bool {
    let Ast::Bin { op: child_op, .. } = child else {
        return false;
    };
    let (Some(outer), Some(inner)) = (op.precedence(), child_op.precedence()) else {
        return false;
    };
    inner < outer || (inner == outer && right_side && op.is_left_strict())
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ast::Num(v) => write!(f, "{v}"),
            Ast::Bin { op, left, right } => {
                write_operand(f, op, left, false)?;
                write!(f, " {} ", op.symbol())?;
                write_operand(f, op, right, true)
            }
        }
    }
}

fn write_operand(
    f: &mut fmt::Formatter<'_>,
    op: &BinOp,
    child: &Ast,
    right_side: bool,
) -> fmt::Result {
    if needs_parens(op, child, right_side) {
        write!(f, "({child})")
    } else {
        write!(f, "{child}")
    }
}
