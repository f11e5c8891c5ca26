use crate::ast::Ast;
use crate::error::EvalError;
use crate::value::Value;

/// Post-order evaluation. Both operands must come out numeric before the
/// operator applies; a boolean operand can only be the result of a nested
/// comparison, which is rejected here rather than coerced.
pub(crate) fn eval(ast: &Ast) -> Result<Value, EvalError> {
    match ast {
        Ast::Num(v) => Ok(Value::Num(*v)),
        Ast::Bin { op, left, right } => {
            let lhs = eval(left)?;
            let rhs = eval(right)?;
            let (Value::Num(a), Value::Num(b)) = (lhs, rhs) else {
                return Err(EvalError::NestedComparison);
            };
            op.apply(a, b)
        }
    }
}
