use crate::error::EvalError;
use crate::value::Value;
use std::fmt;

/// Operator tag of a binary node.
///
/// The seven recognized operators form a closed set with fixed semantics,
/// precedence, and printing behavior. `Other` carries any unrecognized
/// symbol verbatim: such nodes still print, but never evaluate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BinOp {
    /// Addition (a + b)
    Add,
    /// Subtraction (a - b)
    Sub,
    /// Multiplication (a * b)
    Mul,
    /// Division (a / b); the divisor must be nonzero at evaluation time
    Div,
    /// Less-than comparison (a < b)
    Lt,
    /// Greater-than comparison (a > b)
    Gt,
    /// Equality comparison (a = b)
    Eq,
    /// Unrecognized operator symbol, kept for diagnostics printing
    Other(String),
}

impl BinOp {
    /// Maps an operator glyph to its tag. Anything outside the recognized
    /// set is preserved as [`BinOp::Other`].
    pub fn from_symbol(symbol: &str) -> BinOp {
        match symbol {
            "+" => BinOp::Add,
            "-" => BinOp::Sub,
            "*" => BinOp::Mul,
            "/" => BinOp::Div,
            "<" => BinOp::Lt,
            ">" => BinOp::Gt,
            "=" => BinOp::Eq,
            other => BinOp::Other(other.to_string()),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Eq => "=",
            BinOp::Other(s) => s,
        }
    }

    /// Binding strength; higher binds tighter. `None` for unrecognized
    /// operators, which neither take nor induce parentheses.
    pub(crate) fn precedence(&self) -> Option<u8> {
        match self {
            BinOp::Eq => Some(0),
            BinOp::Lt | BinOp::Gt => Some(1),
            BinOp::Add | BinOp::Sub => Some(2),
            BinOp::Mul | BinOp::Div => Some(3),
            BinOp::Other(_) => None,
        }
    }

    /// Operators where operand order matters: a right operand of equal
    /// precedence must keep its parentheses when printed, or the text would
    /// regroup to the left on re-reading. `+`, `*`, and the comparisons are
    /// free in this sense.
    pub(crate) fn is_left_strict(&self) -> bool {
        matches!(self, BinOp::Sub | BinOp::Div)
    }

    /// The operator's semantic function over two numeric operands.
    pub(crate) fn apply(&self, a: f64, b: f64) -> Result<Value, EvalError> {
        let out = match self {
            BinOp::Add => Value::Num(a + b),
            BinOp::Sub => Value::Num(a - b),
            BinOp::Mul => Value::Num(a * b),
            BinOp::Div => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Value::Num(a / b)
            }
            BinOp::Lt => Value::Bool(a < b),
            BinOp::Gt => Value::Bool(a > b),
            BinOp::Eq => Value::Bool(a == b),
            BinOp::Other(symbol) => {
                return Err(EvalError::UnsupportedOperator(symbol.clone()));
            }
        };
        Ok(out)
    }

    /// Arithmetic-only folding rule. Comparisons produce booleans, which are
    /// not representable as literals, and a zero divisor must keep failing
    /// at evaluation time; both return `None` here.
    pub(crate) fn fold_arith(&self, a: f64, b: f64) -> Option<f64> {
        match self {
            BinOp::Add => Some(a + b),
            BinOp::Sub => Some(a - b),
            BinOp::Mul => Some(a * b),
            BinOp::Div if b != 0.0 => Some(a / b),
            _ => None,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
