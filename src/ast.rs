use crate::error::EvalError;
use crate::eval::eval;
use crate::fold::fold;
use crate::op::BinOp;
use crate::value::Value;
use log::debug;

/// An owned expression tree. Leaves are numeric literals; interior nodes are
/// binary operations that exclusively own their operands.
#[derive(Clone, Debug, PartialEq)]
pub enum Ast {
    /// Numeric literal (e.g. 1, -3, 3.14)
    Num(f64),
    /// Binary operation `left <op> right`
    Bin {
        op: BinOp,
        left: Box<Ast>,
        right: Box<Ast>,
    },
}

impl Ast {
    pub fn num(value: f64) -> Ast {
        Ast::Num(value)
    }

    pub fn bin(op: BinOp, left: Ast, right: Ast) -> Ast {
        Ast::Bin {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The stored number, if this is a literal leaf.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Ast::Num(v) => Some(*v),
            Ast::Bin { .. } => None,
        }
    }

    /// The operator tag, if this is a binary node.
    pub fn op(&self) -> Option<&BinOp> {
        match self {
            Ast::Bin { op, .. } => Some(op),
            Ast::Num(_) => None,
        }
    }

    /// Evaluates the tree bottom-up to a number or boolean.
    ///
    /// ```
    /// use ramus::{Ast, BinOp, Value};
    ///
    /// let expr = Ast::bin(
    ///     BinOp::Mul,
    ///     Ast::bin(BinOp::Add, Ast::num(10.0), Ast::num(5.0)),
    ///     Ast::bin(BinOp::Sub, Ast::num(4.0), Ast::num(2.0)),
    /// );
    /// assert_eq!(expr.print(), "(10 + 5) * (4 - 2)");
    /// assert_eq!(expr.evaluate().unwrap(), Value::Num(30.0));
    /// ```
    ///
    /// Errors:
    /// - [`EvalError::DivisionByZero`] if a `/` meets a zero divisor.
    /// - [`EvalError::NestedComparison`] if a comparison result feeds any
    ///   further operation.
    /// - [`EvalError::UnsupportedOperator`] if a node carries an
    ///   unrecognized operator symbol.
    pub fn evaluate(&self) -> Result<Value, EvalError> {
        let out = eval(self)?;
        debug!("evaluate '{self}' -> {out}");
        Ok(out)
    }

    /// Renders the tree with exactly the parentheses needed for the text to
    /// re-read into the same structure. Total: a tree with an unrecognized
    /// operator still prints, with the symbol rendered verbatim.
    pub fn print(&self) -> String {
        self.to_string()
    }

    /// Collapses fully-literal arithmetic subtrees into literals.
    /// Evaluation results and error kinds are unchanged by this pass.
    pub fn simplify(self) -> Ast {
        let out = fold(self);
        debug!("simplified form: {out}");
        out
    }
}
