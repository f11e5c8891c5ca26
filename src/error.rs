use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("nested comparison operations are not supported")]
    NestedComparison,
}
